use crate::color::{self, RGBA};
use crate::transfer::{TransferFunction1d, TransferFunction2d};

/// Soft tissue preset for single-channel scans.
/// Darker dense matter, warm mid range, bone towards white.
/// The lookup texture is generated before returning.
pub fn tissue_tf() -> TransferFunction1d {
    let colors: [(f32, RGBA); 3] = [
        (0.0, color::new(0.11, 0.14, 0.13, 1.0)),
        (0.2415, color::new(0.469, 0.354, 0.223, 1.0)),
        (0.3253, color::white()),
    ];
    let alphas = [
        (0.0, 0.0),
        (0.1787, 0.0),
        (0.2, 0.024),
        (0.28, 0.03),
        (0.4, 0.546),
        (0.547, 0.5266),
    ];

    let mut tf = TransferFunction1d::new();
    for (data_value, value) in colors {
        tf.add_color_point(data_value, value)
            .expect("preset stop in domain");
    }
    for (data_value, alpha) in alphas {
        tf.add_alpha_point(data_value, alpha)
            .expect("preset stop in domain");
    }

    tf.generate_texture();
    tf
}

/// Default 2D setup: one wide soft box, the editor's starting state.
pub fn default_tf2d() -> TransferFunction2d {
    let mut tf = TransferFunction2d::new();
    tf.add_box(0.05, 0.1, 0.8, 0.7, color::white(), 0.4)
        .expect("preset box in domain");

    tf.generate_texture();
    tf
}
