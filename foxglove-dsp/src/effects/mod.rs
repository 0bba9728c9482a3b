//! The effects available to the chain.
//!
//! | Effect | Parameters | Core |
//! |--------|------------|------|
//! | [`Passthrough`] | – | copy |
//! | [`ParamTest`] | linear, log, choice | copy |
//! | [`IirFilter`] | cutoff | [`OnePole`](crate::dsp::one_pole::OnePole) |
//! | [`Overdrive`] | gain | CIC ↑8, diode clip, CIC ↓8 |
//! | [`CabSim`] | – | 256-tap FIR |
//! | [`FixedPointVolume`] | volume | Q1.31 multiply |

pub mod passthrough;
pub mod param_test;
pub mod iir;
pub mod overdrive;
pub mod cab_sim;
pub mod volume;
pub mod kernels;

pub use passthrough::Passthrough;
pub use param_test::ParamTest;
pub use iir::{FilterMode, IirFilter};
pub use overdrive::Overdrive;
pub use cab_sim::CabSim;
pub use volume::FixedPointVolume;
