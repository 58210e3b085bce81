//! Encoder policy.
//!
//! [`QrSettings`] describes *what* symbol to produce and how big to draw it.
//! The values are fixed for every run; nothing on the command line changes
//! them.
//!
//! | Setting | Value | Meaning |
//! |---|---|---|
//! | `ec_level` | `H` | ~30% of the symbol can be damaged and still decode |
//! | `module_size` | 8 | pixels per module edge |
//! | `border` | 2 | quiet-zone width in modules |
//! | `version` | 1 | first version tried |
//! | `fit` | true | upgrade the version when the payload does not fit |

use qrcode::{EcLevel, Version};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QrSettings {
    pub ec_level: EcLevel,
    pub module_size: u32,
    pub border: u32,
    pub version: Version,
    pub fit: bool,
}

impl Default for QrSettings {
    fn default() -> Self {
        Self {
            ec_level: EcLevel::H,
            module_size: 8,
            border: 2,
            version: Version::Normal(1),
            fit: true,
        }
    }
}

impl QrSettings {
    /// Pixel edge length of the rendered image for a symbol `modules` wide.
    pub fn image_side(&self, modules: u32) -> u32 {
        (modules + 2 * self.border) * self.module_size
    }
}
