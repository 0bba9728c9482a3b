//! Fixed-point DSP building blocks.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`intrinsics`] | ARM DSP instruction wrappers |
//! | [`helpers`] | Q1.31 conversion, saturation counting |
//! | [`one_pole`] | One-pole Q1.31 low-pass |
//! | [`cic`] | CIC interpolator / decimator |
//! | [`fir`] | Circular-buffer FIR convolution |

pub mod intrinsics;
pub mod helpers;
pub mod one_pole;
pub mod cic;
pub mod fir;
