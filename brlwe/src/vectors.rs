//! Reference vectors of the ENC2 (n=256, q=256) and ENCT (n=4, q=256) presets.

/// Public polynomial `a` shared by both parties.
pub const ENC2_A: [u8; 256] = [
    43, 98, 100, 95, 218, 37, 156, 50, 45, 89, 128, 74, 14, 182, 53, 216,
    235, 220, 90, 98, 41, 129, 116, 44, 105, 116, 127, 124, 75, 53, 70, 171,
    178, 155, 53, 123, 148, 39, 228, 233, 20, 75, 82, 238, 91, 155, 80, 108,
    69, 39, 82, 90, 226, 200, 181, 154, 21, 29, 195, 42, 18, 81, 113, 22,
    146, 211, 71, 194, 136, 140, 48, 165, 111, 46, 167, 11, 26, 39, 121, 134,
    27, 198, 36, 37, 230, 44, 117, 1, 156, 165, 147, 226, 15, 200, 2, 53,
    94, 123, 224, 103, 0, 29, 57, 23, 88, 168, 58, 189, 134, 244, 146, 81,
    49, 239, 243, 6, 110, 31, 225, 51, 17, 13, 221, 1, 197, 253, 68, 26,
    69, 171, 80, 40, 174, 130, 203, 74, 208, 234, 103, 142, 141, 120, 173, 189,
    92, 28, 14, 31, 78, 157, 99, 154, 64, 111, 38, 11, 122, 130, 245, 177,
    89, 203, 133, 255, 76, 131, 216, 218, 81, 92, 183, 254, 89, 234, 244, 52,
    125, 150, 20, 93, 165, 175, 172, 89, 123, 50, 207, 107, 224, 12, 250, 138,
    227, 116, 34, 94, 85, 194, 203, 139, 71, 75, 83, 11, 8, 121, 26, 217,
    98, 241, 140, 114, 101, 221, 127, 180, 169, 250, 189, 21, 166, 240, 227, 73,
    40, 118, 128, 80, 181, 199, 187, 245, 120, 224, 61, 153, 71, 166, 56, 248,
    211, 169, 39, 245, 55, 90, 219, 95, 106, 202, 94, 15, 53, 227, 165, 69,
];

/// Binary message encrypted under [ENC2_A].
pub const ENC2_MESSAGE: [u8; 256] = [
    1, 0, 1, 0, 0, 0, 0, 1, 0, 1, 1, 0, 1, 0, 1, 1,
    0, 1, 0, 0, 1, 1, 1, 0, 1, 1, 1, 1, 0, 0, 1, 1,
    1, 0, 1, 0, 1, 1, 0, 1, 1, 1, 0, 0, 1, 0, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1, 0, 1, 0, 0,
    0, 0, 0, 0, 0, 0, 0, 1, 1, 0, 1, 1, 0, 1, 0, 0,
    1, 0, 1, 0, 1, 0, 0, 1, 1, 0, 0, 1, 0, 0, 0, 0,
    0, 1, 1, 0, 0, 1, 1, 0, 1, 1, 0, 1, 0, 0, 1, 0,
    1, 1, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0, 1, 0, 0, 1,
    1, 1, 1, 1, 1, 1, 1, 1, 0, 0, 1, 0, 0, 0, 0, 1,
    0, 0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 1, 1, 0,
    1, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 0, 0, 0, 1, 0,
    1, 1, 1, 0, 1, 1, 1, 1, 1, 1, 0, 1, 0, 1, 0, 0,
    1, 0, 0, 1, 1, 1, 1, 1, 0, 0, 1, 1, 1, 1, 1, 0,
    0, 1, 0, 0, 0, 0, 1, 0, 1, 1, 0, 1, 0, 0, 0, 1,
    1, 0, 0, 1, 0, 1, 1, 0, 1, 0, 0, 0, 0, 1, 1, 0,
    0, 0, 1, 1, 0, 0, 1, 0, 1, 1, 0, 0, 0, 0, 1, 1,
];

/// Public polynomial of the four-coefficient test bench.
pub const ENCT_A: [u8; 4] = [30, 20, 150, 80];

/// Binary message of the four-coefficient test bench.
pub const ENCT_MESSAGE: [u8; 4] = [1, 0, 1, 1];
