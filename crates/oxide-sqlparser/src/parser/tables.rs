//! Packed LALR(1) tables for the SQL grammar.
//!
//! Generated by the grammar compiler. Do not edit by hand; regenerate from
//! the grammar instead.

/// Exception entries: `-1, state` headers followed by `(token, action)` pairs.
pub(super) static EXCA: [i32; 6] = [
    -1, 1, 1, -1, -2, 0,
];

/// Packed action and goto targets.
pub(super) static ACT: [i32; 601] = [
    82, 75, 52, 312, 341, 148, 232, 80, 194, 184, 277, 107,
    69, 155, 164, 72, 157, 349, 349, 116, 53, 147, 3, 70,
    243, 244, 245, 246, 247, 74, 248, 249, 55, 213, 275, 60,
    116, 116, 63, 54, 121, 122, 67, 43, 213, 172, 66, 22,
    23, 24, 25, 22, 23, 24, 25, 58, 22, 23, 24, 25,
    106, 37, 322, 38, 22, 23, 24, 25, 239, 114, 269, 178,
    110, 118, 321, 109, 350, 348, 304, 145, 149, 59, 297, 150,
    32, 255, 34, 211, 62, 120, 35, 176, 300, 274, 179, 266,
    264, 39, 158, 55, 159, 162, 55, 214, 168, 103, 54, 144,
    146, 54, 301, 156, 329, 330, 298, 99, 169, 105, 167, 267,
    189, 168, 166, 145, 145, 193, 182, 212, 199, 200, 61, 203,
    204, 205, 206, 207, 208, 209, 210, 318, 188, 201, 271, 175,
    177, 174, 235, 40, 41, 42, 320, 191, 192, 215, 129, 130,
    131, 132, 133, 134, 135, 136, 55, 121, 122, 217, 219, 145,
    190, 230, 223, 113, 222, 236, 224, 225, 220, 231, 158, 288,
    159, 268, 228, 202, 289, 237, 319, 12, 13, 14, 15, 158,
    292, 159, 221, 234, 253, 215, 240, 259, 260, 256, 294, 295,
    218, 258, 85, 286, 254, 291, 290, 89, 287, 101, 94, 263,
    16, 257, 134, 135, 136, 73, 86, 87, 88, 213, 326, 327,
    307, 102, 78, 265, 336, 165, 92, 165, 273, 115, 276, 49,
    222, 129, 130, 131, 132, 133, 134, 135, 136, 335, 195, 284,
    285, 77, 161, 154, 187, 90, 91, 71, 153, 152, 61, 303,
    95, 186, 17, 18, 20, 19, 132, 133, 134, 135, 136, 56,
    55, 241, 93, 101, 310, 313, 116, 308, 299, 305, 296, 309,
    97, 65, 12, 100, 314, 243, 244, 245, 246, 247, 216, 248,
    249, 252, 302, 281, 323, 129, 130, 131, 132, 133, 134, 135,
    136, 280, 181, 346, 325, 251, 145, 215, 145, 187, 331, 333,
    22, 23, 24, 25, 338, 313, 186, 339, 68, 347, 98, 119,
    342, 342, 55, 180, 344, 343, 340, 163, 85, 54, 332, 111,
    334, 89, 353, 61, 94, 354, 108, 355, 104, 50, 64, 56,
    86, 87, 88, 324, 306, 12, 85, 48, 78, 262, 352, 89,
    92, 196, 94, 197, 198, 170, 112, 96, 46, 73, 86, 87,
    88, 44, 278, 317, 279, 227, 78, 77, 26, 233, 92, 90,
    91, 316, 283, 12, 165, 51, 95, 158, 351, 159, 28, 29,
    30, 31, 337, 12, 27, 77, 171, 85, 93, 90, 91, 71,
    89, 33, 238, 94, 95, 173, 36, 57, 229, 160, 56, 86,
    87, 88, 270, 345, 328, 85, 93, 78, 311, 315, 89, 92,
    282, 94, 79, 84, 81, 83, 272, 226, 56, 86, 87, 88,
    123, 76, 293, 12, 185, 78, 77, 242, 183, 92, 90, 91,
    250, 117, 45, 21, 47, 95, 11, 10, 9, 8, 7, 6,
    89, 5, 4, 94, 77, 2, 1, 93, 90, 91, 56, 86,
    87, 88, 0, 95, 0, 0, 0, 151, 0, 0, 89, 92,
    0, 94, 0, 0, 0, 93, 0, 0, 56, 86, 87, 88,
    0, 0, 0, 0, 0, 151, 0, 0, 0, 92, 90, 91,
    0, 0, 0, 0, 0, 95, 0, 0, 0, 0, 124, 128,
    126, 127, 0, 0, 0, 0, 0, 93, 90, 91, 0, 0,
    0, 0, 0, 95, 140, 141, 142, 143, 0, 0, 137, 138,
    139, 0, 0, 261, 0, 93, 129, 130, 131, 132, 133, 134,
    135, 136, 0, 0, 0, 0, 0, 0, 125, 129, 130, 131,
    132, 133, 134, 135, 136, 129, 130, 131, 132, 133, 134, 135,
    136,
];

/// Per-state base offset into `ACT`; `FLAG` means the state only has a default action.
pub(super) static PACT: [i32; 356] = [
    183, -1000, -1000, 275, -1000, -1000, -1000, -1000, -1000, -1000, -1000, -1000,
    -1000, -1000, -1000, -1000, -1000, -3, -28, 10, 60, 407, 368, -1000,
    -1000, -1000, 362, -1000, 338, 322, 393, 240, -37, -7, 227, -1000,
    1, 227, -1000, 323, -46, 227, -46, -1000, -1000, 346, -1000, 364,
    322, 301, 39, 322, 160, -1000, 184, -1000, 29, 321, 50, 227,
    -1000, -1000, 319, -1000, -18, 312, 358, 107, 227, 229, -1000, -1000,
    316, 13, 98, 517, -1000, 417, 395, -1000, -1000, 477, 217, 216,
    -1000, 211, -1000, -1000, -1000, -1000, -1000, -1000, -1000, -1000, -1000, 324,
    -1000, 210, 240, 308, 391, 240, 417, 227, -1000, 357, -49, -1000,
    59, -1000, 304, -1000, -1000, 279, -1000, 221, 346, -1000, -1000, 227,
    95, 417, 417, 477, 206, 352, 477, 477, 116, 477, 477, 477,
    477, 477, 477, 477, 477, -1000, -1000, -1000, -1000, -1000, -1000, -1000,
    -1000, 517, -25, 15, -9, 517, -1000, 455, 186, 346, 407, 112,
    19, -1000, 417, 417, 361, 240, 226, -1000, 381, 417, -1000, -1000,
    -1000, -1000, -1000, 82, 227, -1000, -22, -1000, -1000, -1000, -1000, -1000,
    -1000, -1000, -1000, 224, 239, 282, 286, 9, -1000, -1000, -1000, -1000,
    -1000, 525, -1000, 455, 206, 477, 477, 525, 502, -1000, 344, 199,
    199, 199, 145, 145, -1000, -1000, -1000, -1000, -1000, 477, -1000, 525,
    -1000, -16, 346, -17, 7, -1000, -1000, 99, -10, -1000, 78, 206,
    275, -19, -1000, 381, 372, 375, 98, 278, -1000, -1000, 268, -1000,
    388, 221, 221, -1000, -1000, 153, 125, 156, 155, 138, 140, -1000,
    251, -30, 2, 249, -20, -2, -1000, 525, 237, 477, -1000, 525,
    -1000, -34, -1000, -1000, -1000, 417, -1000, 334, 175, -1000, -1000, 240,
    372, -1000, 477, 477, -1000, -1000, 386, 374, 239, 75, -1000, 132,
    -1000, 96, -1000, -1000, -1000, -1000, -14, -26, -1000, -1000, -1000, -1000,
    -1000, -1000, 477, 525, -1000, -1000, 332, 206, -1000, -1000, 173, 174,
    -1000, 86, -1000, 381, 417, 477, 417, -1000, -1000, 205, 188, 525,
    404, -1000, 477, 477, -1000, -1000, -1000, 372, 98, 172, 98, 227,
    227, 240, 525, -1000, 299, -35, -1000, -36, 160, -1000, 398, 349,
    -1000, 227, -1000, -1000, 227, -1000, 227, -1000,
];

/// Per-nonterminal base offset into `ACT` for goto lookups.
pub(super) static PGO: [i32; 67] = [
    0, 486, 485, 21, 482, 481, 479, 478, 477, 476, 475, 474,
    392, 472, 471, 470, 12, 23, 469, 468, 15, 464, 9, 463,
    460, 239, 458, 14, 29, 457, 456, 451, 450, 8, 5, 1,
    449, 448, 447, 13, 16, 7, 446, 444, 441, 6, 440, 3,
    436, 10, 435, 434, 429, 428, 4, 2, 20, 289, 427, 426,
    425, 422, 421, 414, 0, 11, 412,
];

/// Left-hand-side nonterminal of each production.
pub(super) static R1: [i32; 189] = [
    0, 1, 2, 2, 2, 2, 2, 2, 2, 2, 2, 3,
    3, 4, 5, 6, 7, 8, 8, 8, 9, 9, 9, 10,
    11, 11, 11, 66, 12, 13, 13, 14, 14, 14, 14, 14,
    15, 15, 16, 16, 17, 17, 17, 20, 20, 18, 18, 18,
    21, 21, 22, 22, 22, 22, 19, 19, 19, 23, 23, 23,
    23, 23, 23, 23, 23, 23, 24, 24, 24, 25, 25, 26,
    26, 26, 27, 27, 28, 28, 28, 28, 28, 29, 29, 29,
    29, 29, 29, 29, 29, 29, 29, 30, 30, 30, 30, 30,
    30, 30, 31, 31, 32, 32, 33, 33, 34, 34, 35, 35,
    35, 35, 35, 35, 35, 35, 35, 35, 35, 35, 35, 35,
    35, 35, 35, 35, 36, 36, 37, 37, 37, 38, 38, 39,
    39, 40, 40, 41, 41, 42, 42, 42, 42, 43, 43, 44,
    44, 45, 45, 46, 46, 47, 48, 48, 48, 49, 49, 49,
    50, 50, 50, 52, 52, 53, 53, 54, 54, 51, 51, 55,
    55, 56, 57, 57, 58, 58, 59, 59, 60, 60, 60, 60,
    60, 61, 61, 62, 62, 63, 63, 64, 65,
];

/// Right-hand-side length of each production.
pub(super) static R2: [i32; 189] = [
    0, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 12,
    3, 7, 8, 7, 3, 5, 8, 4, 6, 7, 4, 5,
    4, 5, 5, 0, 2, 0, 2, 1, 2, 1, 1, 1,
    0, 1, 1, 3, 1, 2, 3, 1, 1, 0, 1, 2,
    1, 3, 3, 3, 3, 5, 0, 1, 2, 1, 1, 2,
    3, 2, 3, 2, 2, 2, 1, 3, 3, 1, 3, 0,
    5, 5, 0, 2, 1, 3, 3, 2, 3, 3, 3, 4,
    3, 4, 5, 6, 3, 4, 4, 1, 1, 1, 1, 1,
    1, 1, 2, 1, 1, 3, 3, 3, 1, 3, 1, 1,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 2, 3,
    4, 5, 4, 1, 1, 1, 1, 1, 1, 3, 4, 1,
    2, 4, 2, 1, 3, 1, 1, 1, 1, 0, 3, 0,
    2, 0, 3, 1, 3, 2, 0, 1, 1, 0, 2, 4,
    0, 2, 4, 0, 3, 1, 3, 1, 3, 0, 5, 1,
    3, 3, 0, 2, 0, 3, 0, 1, 1, 1, 1, 1,
    1, 0, 1, 0, 1, 0, 2, 1, 0,
];

/// Symbol that must be checked against a packed `ACT` entry.
pub(super) static CHK: [i32; 356] = [
    -1000, -1, -2, -3, -4, -5, -6, -7, -8, -9, -10, -11,
    4, 5, 6, 7, 33, 83, 84, 86, 85, -14, 49, 50,
    51, 52, -12, -66, -12, -12, -12, -12, 87, -62, 89, 93,
    -59, 89, 91, 87, 87, 88, 89, -3, 17, -15, 18, -13,
    29, -25, 35, 8, -55, -56, -41, -64, 35, -58, 92, 88,
    -64, 35, 87, -64, 35, -57, 92, -64, -57, -16, -17, 73,
    -20, 35, -28, -35, -29, 67, 44, -42, -41, -37, -64, -36,
    -38, 20, 36, 37, 38, 25, 71, 72, 48, 92, 28, 78,
    15, -25, 33, 76, -25, 53, 45, 76, 35, 67, -64, -65,
    35, -65, 90, 35, 20, 64, -64, 8, 53, -18, -64, 19,
    76, 65, 66, -30, 21, 67, 23, 24, 22, 68, 69, 70,
    71, 72, 73, 74, 75, 45, 46, 47, 39, 40, 41, 42,
    -28, -35, -28, -3, -34, -35, -35, 44, 44, 44, 44, -39,
    -20, -40, 79, 81, -52, 44, -55, 35, -27, 9, -56, -20,
    -64, -65, 20, -63, 94, -60, 86, 84, 32, 85, 12, 35,
    35, 35, -65, -21, -22, -24, 44, 35, -17, -64, 73, -28,
    -28, -35, -33, 44, 21, 23, 24, -35, -35, 25, 67, -35,
    -35, -35, -35, -35, -35, -35, -35, 112, 112, 53, 112, -35,
    112, -16, 18, -16, -3, 82, -40, -39, -20, -20, -31, 28,
    -3, -53, -41, -27, -45, 12, -28, 64, -64, -65, -61, 90,
    -27, 53, -23, 54, 55, 56, 57, 58, 60, 61, -19, 35,
    19, -22, -3, 76, -34, -3, -33, -35, -35, 65, 25, -35,
    112, -16, 112, 112, 82, 80, -51, 64, -32, -33, 112, 53,
    -45, -49, 14, 13, 35, 35, -43, 10, -22, -22, 54, 59,
    54, 59, 54, 54, 54, -26, 62, 63, 35, 112, 112, 35,
    112, 112, 65, -35, 112, -20, 30, 53, -41, -49, -35, -46,
    -47, -35, -65, -44, 11, 13, 64, 54, 54, 88, 88, -35,
    31, -33, 53, 53, -48, 26, 27, -45, -28, -34, -28, 44,
    44, 6, -35, -47, -49, -54, -64, -54, -55, -50, 16, 34,
    112, 53, 112, 6, 21, -64, -64, -64,
];

/// Default action per state: `0` error, `-2` consult `EXCA`, otherwise a production.
pub(super) static DEF: [i32; 356] = [
    0, -2, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10,
    27, 27, 27, 27, 27, 183, 174, 0, 0, 0, 31, 33,
    34, 35, 36, 29, 0, 0, 0, 0, 172, 0, 0, 184,
    0, 0, 175, 0, 170, 0, 170, 12, 32, 0, 37, 28,
    0, 0, 69, 0, 16, 167, 0, 135, 187, 0, 0, 0,
    188, 187, 0, 188, 0, 0, 0, 0, 0, 0, 38, 40,
    45, 187, 43, 44, 76, 0, 0, 106, 107, 0, 135, 0,
    123, 0, 137, 138, 139, 140, 126, 127, 128, 124, 125, 0,
    30, 159, 0, 0, 74, 0, 0, 0, 188, 0, 185, 19,
    0, 22, 0, 24, 171, 0, 188, 0, 0, 41, 46, 0,
    0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
    0, 0, 0, 0, 0, 91, 92, 93, 94, 95, 96, 97,
    79, 0, 0, 0, 0, 104, 118, 0, 0, 0, 0, 0,
    0, 131, 0, 0, 0, 0, 74, 70, 145, 0, 168, 169,
    136, 17, 173, 0, 0, 188, 181, 176, 177, 178, 179, 180,
    23, 25, 26, 74, 48, 54, 0, 66, 39, 47, 42, 77,
    78, 81, 82, 0, 0, 0, 0, 84, 0, 88, 0, 110,
    111, 112, 113, 114, 115, 116, 117, 80, 108, 0, 109, 104,
    119, 0, 0, 0, 0, 129, 132, 0, 0, 134, 165, 0,
    99, 0, 161, 145, 153, 0, 75, 0, 186, 20, 0, 182,
    141, 0, 0, 57, 58, 0, 0, 0, 0, 0, 71, 55,
    0, 0, 0, 0, 0, 0, 83, 85, 0, 0, 89, 105,
    120, 0, 122, 90, 130, 0, 13, 0, 98, 100, 160, 0,
    153, 15, 0, 0, 188, 21, 143, 0, 49, 52, 59, 0,
    61, 0, 63, 64, 65, 50, 0, 0, 56, 51, 68, 67,
    102, 103, 0, 86, 121, 133, 0, 0, 162, 14, 154, 146,
    147, 150, 18, 145, 0, 0, 0, 60, 62, 0, 0, 87,
    0, 101, 0, 0, 149, 151, 152, 153, 144, 142, 53, 0,
    0, 0, 155, 148, 156, 0, 163, 0, 166, 11, 0, 0,
    72, 0, 73, 157, 0, 164, 0, 158,
];

/// Translation of token codes below 128.
pub(super) static TOK1: [i32; 127] = [
    1, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    3, 75, 68, 3, 44, 112, 73, 71, 53, 72, 76, 74,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    46, 45, 47, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 70, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3, 3,
    3, 3, 3, 3, 69, 3, 48,
];

/// Translation of codes in the private range starting at 57344.
pub(super) static TOK2: [i32; 95] = [
    2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13,
    14, 15, 16, 17, 18, 19, 20, 21, 22, 23, 24, 25,
    26, 27, 28, 29, 30, 31, 32, 33, 34, 35, 36, 37,
    38, 39, 40, 41, 42, 43, 49, 50, 51, 52, 54, 55,
    56, 57, 58, 59, 60, 61, 62, 63, 64, 65, 66, 67,
    77, 78, 79, 80, 81, 82, 83, 84, 85, 86, 87, 88,
    89, 90, 91, 92, 93, 94, 95, 96, 97, 98, 99, 100,
    101, 102, 103, 104, 105, 106, 107, 108, 109, 110, 111,
];

/// Translation pairs for any remaining codes.
pub(super) static TOK3: [i32; 1] = [
    0,
];
