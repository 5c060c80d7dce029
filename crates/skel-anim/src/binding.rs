//! Default-versus-live palette selection

use crate::skinning::SkinMatrixPalette;

/// Which palette an instance currently exposes to the renderer
///
/// The binding never owns a palette. It is resolved against the skeleton's
/// default palette and the instance's live palette at read time, so instances
/// sharing one skeleton never alias each other's animated matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PoseBinding {
    /// The skeleton's default (bind) palette
    #[default]
    BindPose,
    /// The palette produced by the most recent update
    Animated,
}

impl PoseBinding {
    /// Pick exactly one of the two palettes
    pub fn resolve<'a>(
        self,
        default_palette: &'a SkinMatrixPalette,
        live_palette: &'a SkinMatrixPalette,
    ) -> &'a SkinMatrixPalette {
        match self {
            Self::BindPose => default_palette,
            Self::Animated => live_palette,
        }
    }

    pub fn is_animated(self) -> bool {
        self == Self::Animated
    }
}
