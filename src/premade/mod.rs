// Some prebuilt transfer functions for common scan content.
// Starting points for an editor session, not a calibration.

pub mod transfer_functions;
