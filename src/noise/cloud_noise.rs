//! Single-octave 3D gradient noise over a fixed permutation table.
//!
//! This is the base sampler the field generator layers into octaves. Unlike
//! classic Perlin noise it interpolates with a non-negative-clamping lerp,
//! so a sample is always >= 0 (see [`crate::math::lerp`]).

use crate::math::{floor, lerp3, smoothstep};

/// The fixed permutation table used to hash lattice coordinates into
/// gradient selectors.
///
/// Process-wide constant data; every sampler built with [`CloudNoise::default`]
/// shares it, which is what makes the generated field reproducible for a
/// given set of dimensions.
const DEFAULT_PERMUTATION: [u8; 256] = [
    151, 160, 137, 91, 90, 15, 131, 13, 201, 95, 96, 53, 194, 233, 7, 225, 140, 36, 103, 30, 69,
    142, 8, 99, 37, 240, 21, 10, 23, 190, 6, 148, 247, 120, 234, 75, 0, 26, 197, 62, 94, 252, 219,
    203, 117, 35, 11, 32, 57, 177, 33, 88, 237, 149, 56, 87, 174, 20, 125, 136, 171, 168, 68, 175,
    74, 165, 71, 134, 139, 48, 27, 166, 77, 146, 158, 231, 83, 111, 229, 122, 60, 211, 133, 230,
    220, 105, 92, 41, 55, 46, 245, 40, 244, 102, 143, 54, 65, 25, 63, 161, 1, 216, 80, 73, 209,
    76, 132, 187, 208, 89, 18, 169, 200, 196, 135, 130, 116, 188, 159, 86, 164, 100, 109, 198,
    173, 186, 3, 64, 52, 217, 226, 250, 124, 123, 5, 202, 38, 147, 118, 126, 255, 82, 85, 212,
    207, 206, 59, 227, 47, 16, 58, 17, 182, 189, 28, 42, 223, 183, 170, 213, 119, 248, 152, 2, 44,
    154, 163, 70, 221, 153, 101, 155, 167, 43, 172, 9, 129, 22, 39, 253, 19, 98, 108, 110, 79,
    113, 224, 232, 178, 185, 112, 104, 218, 246, 97, 228, 251, 34, 242, 193, 238, 210, 144, 12,
    191, 179, 162, 241, 81, 51, 145, 235, 249, 14, 239, 107, 49, 192, 214, 31, 181, 199, 106, 157,
    184, 84, 204, 176, 115, 121, 50, 45, 127, 4, 150, 254, 138, 236, 205, 93, 222, 114, 67, 29,
    24, 72, 243, 141, 128, 195, 78, 66, 215, 61, 156, 180,
];

/// Single-octave gradient noise sampler.
///
/// Holds the permutation table as owned immutable state, so alternate tables
/// can be injected for testing without touching any global.
#[derive(Debug, Clone)]
pub struct CloudNoise {
    /// Permutation table (256 bytes)
    p: [u8; 256],
}

impl Default for CloudNoise {
    fn default() -> Self {
        Self {
            p: DEFAULT_PERMUTATION,
        }
    }
}

impl CloudNoise {
    /// Creates a sampler over a caller-supplied permutation table.
    #[must_use]
    pub const fn with_permutation(p: [u8; 256]) -> Self {
        Self { p }
    }

    /// Look up the permutation value at index x.
    ///
    /// The `& 255` wrap makes the 256-entry table behave as the classical
    /// doubled 512-entry table: `p[i]` for `i` in `256..512` equals
    /// `p[i - 256]`.
    #[inline]
    const fn p(&self, x: i32) -> i32 {
        self.p[(x & 255) as usize] as i32
    }

    /// Sample noise at the given coordinates.
    ///
    /// The result is always >= 0 because every interpolation stage clamps;
    /// it is not otherwise bounded, so callers clamp to their own range.
    #[must_use]
    #[allow(clippy::many_single_char_names, clippy::similar_names)]
    pub fn sample(&self, x: f64, y: f64, z: f64) -> f64 {
        let xf = floor(x);
        let yf = floor(y);
        let zf = floor(z);

        let xi = xf & 255;
        let yi = yf & 255;
        let zi = zf & 255;

        let xr = x - f64::from(xf);
        let yr = y - f64::from(yf);
        let zr = z - f64::from(zf);

        let u = smoothstep(xr);
        let v = smoothstep(yr);
        let w = smoothstep(zr);

        // Hash the 8 corners of the surrounding unit cube: combine X and Y
        // through the table, then offset by Z.
        let a = self.p(xi) + yi;
        let b = self.p(xi + 1) + yi;
        let aa = self.p(a) + zi;
        let ab = self.p(a + 1) + zi;
        let ba = self.p(b) + zi;
        let bb = self.p(b + 1) + zi;

        let d000 = grad(self.p(aa), xr, yr, zr);
        let d100 = grad(self.p(ba), xr - 1.0, yr, zr);
        let d010 = grad(self.p(ab), xr, yr - 1.0, zr);
        let d110 = grad(self.p(bb), xr - 1.0, yr - 1.0, zr);
        let d001 = grad(self.p(aa + 1), xr, yr, zr - 1.0);
        let d101 = grad(self.p(ba + 1), xr - 1.0, yr, zr - 1.0);
        let d011 = grad(self.p(ab + 1), xr, yr - 1.0, zr - 1.0);
        let d111 = grad(self.p(bb + 1), xr - 1.0, yr - 1.0, zr - 1.0);

        lerp3(u, v, w, d000, d100, d010, d110, d001, d101, d011, d111)
    }
}

/// Dot product of the hashed gradient direction with the corner-to-sample
/// vector.
///
/// The low 4 bits select two signed components: the first is x for
/// `h < 8`, else y; the second is y for `h < 4`, x for h = 12 or 14, else z.
/// Bits 0 and 1 give the signs.
#[inline]
fn grad(hash: i32, x: f64, y: f64, z: f64) -> f64 {
    let h = hash & 15;
    let u = if h < 8 { x } else { y };
    let v = if h < 4 {
        y
    } else if h == 12 || h == 14 {
        x
    } else {
        z
    };

    (if h & 1 == 0 { u } else { -u }) + (if h & 2 == 0 { v } else { -v })
}
