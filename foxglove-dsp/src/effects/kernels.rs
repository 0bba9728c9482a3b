//! Measured cabinet impulse responses.
//!
//! Taps are Q1.31 and already divided by the kernel length, so a
//! full-scale input cannot overflow the 32-bit accumulator.

use crate::dsp::fir::FirKernel;

/// Taps per cabinet impulse response.
pub const CAB_KERNEL_LEN: usize = 256;

/// Fender Twin Reverb, close-miked.
pub static FENDER_TWIN_REVERB: FirKernel<CAB_KERNEL_LEN> = FirKernel::from_q31_scaled([
    118861, 248308, 225188, 125849, 72302, 42370, -5074, -73272,
    -149370, -169454, -102290, -26979, 4499, 3465, -8571, 7160,
    36711, 22835, -4578, -4697, -1566, 18870, 69174, 77943,
    22802, -16384, -16041, -15392, -19066, -29075, -44713, -35480,
    -6875, 13997, 24312, 11459, -12448, 3793, 43082, 37671,
    4642, -19235, -46221, -56845, -39556, -27918, -28971, -17894,
    11187, 24830, 5098, -24844, -39781, -40704, -30985, -4458,
    19647, 24478, 29068, 35993, 19252, -21256, -47171, -39538,
    -16213, 499, 5206, 3560, -2645, -14832, -25507, -28773,
    -32762, -37555, -32288, -20198, -12748, -5885, 3336, 9466,
    11629, 6676, -3193, -9767, -16519, -23699, -23721, -23301,
    -29561, -32605, -30916, -30993, -26833, -15817, -5344, 3527,
    12114, 16690, 16388, 12366, 4270, -2959, -5026, -9358,
    -20197, -29531, -30691, -23191, -11277, -368, 8940, 14868,
    10671, -2459, -14010, -21076, -26166, -24031, -13730, -3830,
    1900, 4242, 4424, 3213, 404, -2569, -1646, 1954,
    936, -5364, -11573, -15769, -17708, -16030, -10272, -2648,
    4446, 9490, 10038, 4758, -2023, -4314, -1994, 1893,
    4286, 1754, -3537, -5683, -4859, -1900, 4693, 11897,
    16290, 18705, 18699, 14877, 9499, 4473, -307, -3713,
    -5702, -7118, -7501, -6948, -6710, -6782, -6666, -7324,
    -7223, -3145, 3266, 9025, 14197, 18280, 20342, 20409,
    17302, 10241, 1906, -4019, -6414, -6463, -5959, -5475,
    -4212, -1746, 1452, 4658, 7612, 10670, 14057, 16799,
    16943, 13735, 9037, 6019, 5438, 5086, 3300, -18,
    -3749, -5775, -5241, -2815, 1135, 5640, 8522, 8734,
    6922, 4746, 5061, 8368, 11366, 11973, 10719, 8570,
    6468, 4352, 1295, -2045, -3688, -3321, -1823, 38,
    1161, 1430, 1673, 2002, 2719, 4639, 7692, 11087,
    13823, 14414, 12947, 11420, 10328, 8879, 7027, 4706,
    2248, 751, 413, 884, 2111, 3595, 5209, 7228,
    8710, 9008, 8708, 7581, 5375, 3103, 1354, 105,
]);
