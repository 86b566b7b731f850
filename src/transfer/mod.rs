mod curve;
mod tf1d;
mod tf2d;

pub use curve::{
    AlphaCurve, AnchoredCurve, ColorCurve, ControlPoint, Curve, CurveSweep, CurveValue,
};
pub use tf1d::{TransferFunction1d, TEXTURE_HEIGHT, TEXTURE_WIDTH};
pub use tf2d::{AlphaRamp, TfBox, TransferFunction2d, DEFAULT_HEIGHT, DEFAULT_WIDTH};
