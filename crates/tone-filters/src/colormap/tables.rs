//! Static 256-entry colormap tables.
//!
//! Sampled from the standard `pink`, `winter`, `hot` and `bone` colormaps at
//! 256 points and rounded to 8 bits. Index is the input intensity, value is
//! the `[r, g, b]` output.

/// Pastel pink ramp: sqrt of (2 * gray + hot) / 3.
#[rustfmt::skip]
pub static PINK: [[u8; 3]; 256] = [
    [ 15,   0,   0], [ 25,  13,  13], [ 32,  18,  18], [ 38,  23,  23],
    [ 43,  26,  26], [ 47,  29,  29], [ 51,  32,  32], [ 55,  34,  34],
    [ 58,  37,  37], [ 62,  39,  39], [ 65,  41,  41], [ 68,  43,  43],
    [ 71,  45,  45], [ 73,  47,  47], [ 76,  49,  49], [ 79,  50,  50],
    [ 81,  52,  52], [ 83,  54,  54], [ 86,  55,  55], [ 88,  57,  57],
    [ 90,  58,  58], [ 92,  60,  60], [ 95,  61,  61], [ 97,  63,  63],
    [ 99,  64,  64], [101,  65,  65], [103,  66,  66], [104,  68,  68],
    [106,  69,  69], [108,  70,  70], [110,  71,  71], [112,  73,  73],
    [114,  74,  74], [115,  75,  75], [117,  76,  76], [119,  77,  77],
    [120,  78,  78], [122,  79,  79], [124,  80,  80], [125,  81,  81],
    [127,  82,  82], [128,  83,  83], [130,  84,  84], [131,  85,  85],
    [133,  86,  86], [134,  87,  87], [136,  88,  88], [137,  89,  89],
    [139,  90,  90], [140,  91,  91], [141,  92,  92], [143,  93,  93],
    [144,  94,  94], [146,  95,  95], [147,  96,  96], [148,  97,  97],
    [150,  98,  98], [151,  98,  98], [152,  99,  99], [154, 100, 100],
    [155, 101, 101], [156, 102, 102], [157, 103, 103], [159, 103, 103],
    [160, 104, 104], [161, 105, 105], [162, 106, 106], [164, 107, 107],
    [165, 108, 108], [166, 108, 108], [167, 109, 109], [168, 110, 110],
    [169, 111, 111], [171, 111, 111], [172, 112, 112], [173, 113, 113],
    [174, 114, 114], [175, 114, 114], [176, 115, 115], [177, 116, 116],
    [179, 117, 117], [180, 117, 117], [181, 118, 118], [182, 119, 119],
    [183, 119, 119], [184, 120, 120], [185, 121, 121], [186, 122, 122],
    [187, 122, 122], [188, 123, 123], [189, 124, 124], [190, 124, 124],
    [191, 125, 125], [192, 126, 126], [193, 126, 126], [194, 127, 127],
    [195, 129, 128], [195, 130, 128], [196, 132, 129], [196, 133, 130],
    [197, 135, 130], [197, 136, 131], [198, 138, 132], [198, 139, 132],
    [198, 140, 133], [199, 142, 134], [199, 143, 134], [200, 145, 135],
    [200, 146, 135], [201, 147, 136], [201, 149, 137], [201, 150, 137],
    [202, 151, 138], [202, 153, 139], [203, 154, 139], [203, 155, 140],
    [203, 156, 140], [204, 158, 141], [204, 159, 142], [205, 160, 142],
    [205, 161, 143], [206, 163, 143], [206, 164, 144], [206, 165, 145],
    [207, 166, 145], [207, 167, 146], [208, 169, 146], [208, 170, 147],
    [208, 171, 148], [209, 172, 148], [209, 173, 149], [210, 174, 149],
    [210, 175, 150], [210, 177, 150], [211, 178, 151], [211, 179, 151],
    [212, 180, 152], [212, 181, 153], [212, 182, 153], [213, 183, 154],
    [213, 184, 154], [214, 185, 155], [214, 186, 155], [214, 187, 156],
    [215, 189, 156], [215, 190, 157], [216, 191, 158], [216, 192, 158],
    [216, 193, 159], [217, 194, 159], [217, 195, 160], [218, 196, 160],
    [218, 197, 161], [218, 198, 161], [219, 199, 162], [219, 200, 162],
    [220, 201, 163], [220, 202, 163], [220, 203, 164], [221, 204, 164],
    [221, 205, 165], [221, 206, 165], [222, 207, 166], [222, 208, 166],
    [223, 208, 167], [223, 209, 167], [223, 210, 168], [224, 211, 168],
    [224, 212, 169], [225, 213, 169], [225, 214, 170], [225, 215, 170],
    [226, 216, 171], [226, 217, 171], [226, 218, 172], [227, 219, 172],
    [227, 220, 173], [228, 220, 173], [228, 221, 174], [228, 222, 174],
    [229, 223, 175], [229, 224, 175], [229, 225, 176], [230, 226, 176],
    [230, 227, 177], [230, 228, 177], [231, 228, 178], [231, 229, 178],
    [232, 230, 179], [232, 231, 179], [232, 232, 180], [233, 233, 180],
    [233, 233, 182], [233, 233, 183], [234, 234, 184], [234, 234, 186],
    [235, 235, 187], [235, 235, 188], [235, 235, 190], [236, 236, 191],
    [236, 236, 192], [236, 236, 194], [237, 237, 195], [237, 237, 196],
    [237, 237, 198], [238, 238, 199], [238, 238, 200], [238, 238, 202],
    [239, 239, 203], [239, 239, 204], [240, 240, 205], [240, 240, 207],
    [240, 240, 208], [241, 241, 209], [241, 241, 210], [241, 241, 211],
    [242, 242, 213], [242, 242, 214], [242, 242, 215], [243, 243, 216],
    [243, 243, 217], [243, 243, 218], [244, 244, 220], [244, 244, 221],
    [244, 244, 222], [245, 245, 223], [245, 245, 224], [245, 245, 225],
    [246, 246, 226], [246, 246, 228], [247, 247, 229], [247, 247, 230],
    [247, 247, 231], [248, 248, 232], [248, 248, 233], [248, 248, 234],
    [249, 249, 235], [249, 249, 236], [249, 249, 237], [250, 250, 239],
    [250, 250, 240], [250, 250, 241], [251, 251, 242], [251, 251, 243],
    [251, 251, 244], [252, 252, 245], [252, 252, 246], [252, 252, 247],
    [253, 253, 248], [253, 253, 249], [253, 253, 250], [254, 254, 251],
    [254, 254, 252], [254, 254, 253], [255, 255, 254], [255, 255, 255],
];

/// Blue to green ramp with red held at zero.
#[rustfmt::skip]
pub static WINTER: [[u8; 3]; 256] = [
    [  0,   0, 255], [  0,   1, 255], [  0,   2, 254], [  0,   3, 254],
    [  0,   4, 253], [  0,   5, 253], [  0,   6, 252], [  0,   7, 252],
    [  0,   8, 251], [  0,   9, 251], [  0,  10, 250], [  0,  11, 250],
    [  0,  12, 249], [  0,  13, 249], [  0,  14, 248], [  0,  15, 248],
    [  0,  16, 247], [  0,  17, 247], [  0,  18, 246], [  0,  19, 246],
    [  0,  20, 245], [  0,  21, 244], [  0,  22, 244], [  0,  23, 243],
    [  0,  24, 243], [  0,  25, 243], [  0,  26, 242], [  0,  27, 242],
    [  0,  28, 241], [  0,  29, 241], [  0,  30, 240], [  0,  31, 240],
    [  0,  32, 239], [  0,  33, 239], [  0,  34, 238], [  0,  35, 238],
    [  0,  36, 237], [  0,  37, 237], [  0,  38, 236], [  0,  39, 236],
    [  0,  40, 235], [  0,  41, 235], [  0,  42, 234], [  0,  43, 234],
    [  0,  44, 233], [  0,  45, 233], [  0,  46, 232], [  0,  47, 232],
    [  0,  48, 231], [  0,  49, 231], [  0,  50, 230], [  0,  51, 230],
    [  0,  52, 229], [  0,  53, 228], [  0,  54, 228], [  0,  55, 227],
    [  0,  56, 227], [  0,  57, 227], [  0,  58, 226], [  0,  59, 226],
    [  0,  60, 225], [  0,  61, 225], [  0,  62, 224], [  0,  63, 224],
    [  0,  64, 223], [  0,  65, 223], [  0,  66, 222], [  0,  67, 222],
    [  0,  68, 221], [  0,  69, 221], [  0,  70, 220], [  0,  71, 220],
    [  0,  72, 219], [  0,  73, 219], [  0,  74, 218], [  0,  75, 218],
    [  0,  76, 217], [  0,  77, 217], [  0,  78, 216], [  0,  79, 216],
    [  0,  80, 215], [  0,  81, 215], [  0,  82, 214], [  0,  83, 214],
    [  0,  84, 213], [  0,  85, 213], [  0,  86, 212], [  0,  87, 211],
    [  0,  88, 211], [  0,  89, 211], [  0,  90, 210], [  0,  91, 210],
    [  0,  92, 209], [  0,  93, 209], [  0,  94, 208], [  0,  95, 208],
    [  0,  96, 207], [  0,  97, 207], [  0,  98, 206], [  0,  99, 206],
    [  0, 100, 205], [  0, 101, 205], [  0, 102, 204], [  0, 103, 204],
    [  0, 104, 203], [  0, 105, 203], [  0, 106, 202], [  0, 107, 202],
    [  0, 108, 201], [  0, 109, 201], [  0, 110, 200], [  0, 111, 200],
    [  0, 112, 199], [  0, 113, 199], [  0, 114, 198], [  0, 115, 198],
    [  0, 116, 197], [  0, 117, 197], [  0, 118, 196], [  0, 119, 195],
    [  0, 120, 195], [  0, 121, 195], [  0, 122, 194], [  0, 123, 194],
    [  0, 124, 193], [  0, 125, 193], [  0, 126, 192], [  0, 127, 192],
    [  0, 128, 191], [  0, 129, 191], [  0, 130, 190], [  0, 131, 190],
    [  0, 132, 189], [  0, 133, 189], [  0, 134, 188], [  0, 135, 188],
    [  0, 136, 187], [  0, 137, 187], [  0, 138, 186], [  0, 139, 186],
    [  0, 140, 185], [  0, 141, 185], [  0, 142, 184], [  0, 143, 184],
    [  0, 144, 183], [  0, 145, 183], [  0, 146, 182], [  0, 147, 182],
    [  0, 148, 181], [  0, 149, 180], [  0, 150, 180], [  0, 151, 179],
    [  0, 152, 179], [  0, 153, 179], [  0, 154, 178], [  0, 155, 178],
    [  0, 156, 177], [  0, 157, 177], [  0, 158, 176], [  0, 159, 176],
    [  0, 160, 175], [  0, 161, 175], [  0, 162, 174], [  0, 163, 174],
    [  0, 164, 173], [  0, 165, 173], [  0, 166, 172], [  0, 167, 172],
    [  0, 168, 171], [  0, 169, 171], [  0, 170, 170], [  0, 171, 170],
    [  0, 172, 169], [  0, 173, 169], [  0, 174, 168], [  0, 175, 168],
    [  0, 176, 167], [  0, 177, 167], [  0, 178, 166], [  0, 179, 166],
    [  0, 180, 165], [  0, 181, 164], [  0, 182, 164], [  0, 183, 163],
    [  0, 184, 163], [  0, 185, 163], [  0, 186, 162], [  0, 187, 162],
    [  0, 188, 161], [  0, 189, 161], [  0, 190, 160], [  0, 191, 160],
    [  0, 192, 159], [  0, 193, 159], [  0, 194, 158], [  0, 195, 158],
    [  0, 196, 157], [  0, 197, 157], [  0, 198, 156], [  0, 199, 156],
    [  0, 200, 155], [  0, 201, 155], [  0, 202, 154], [  0, 203, 154],
    [  0, 204, 153], [  0, 205, 153], [  0, 206, 152], [  0, 207, 152],
    [  0, 208, 151], [  0, 209, 151], [  0, 210, 150], [  0, 211, 150],
    [  0, 212, 149], [  0, 213, 148], [  0, 214, 148], [  0, 215, 147],
    [  0, 216, 147], [  0, 217, 147], [  0, 218, 146], [  0, 219, 146],
    [  0, 220, 145], [  0, 221, 145], [  0, 222, 144], [  0, 223, 144],
    [  0, 224, 143], [  0, 225, 143], [  0, 226, 142], [  0, 227, 142],
    [  0, 228, 141], [  0, 229, 141], [  0, 230, 140], [  0, 231, 140],
    [  0, 232, 139], [  0, 233, 139], [  0, 234, 138], [  0, 235, 138],
    [  0, 236, 137], [  0, 237, 137], [  0, 238, 136], [  0, 239, 136],
    [  0, 240, 135], [  0, 241, 135], [  0, 242, 134], [  0, 243, 134],
    [  0, 244, 133], [  0, 245, 132], [  0, 246, 132], [  0, 247, 132],
    [  0, 248, 131], [  0, 249, 131], [  0, 250, 130], [  0, 251, 130],
    [  0, 252, 129], [  0, 253, 129], [  0, 254, 128], [  0, 255, 128],
];

/// Black through red and yellow to white.
#[rustfmt::skip]
pub static HOT: [[u8; 3]; 256] = [
    [  3,   0,   0], [  5,   0,   0], [  8,   0,   0], [ 11,   0,   0],
    [ 13,   0,   0], [ 16,   0,   0], [ 19,   0,   0], [ 21,   0,   0],
    [ 24,   0,   0], [ 27,   0,   0], [ 29,   0,   0], [ 32,   0,   0],
    [ 35,   0,   0], [ 37,   0,   0], [ 40,   0,   0], [ 43,   0,   0],
    [ 45,   0,   0], [ 48,   0,   0], [ 50,   0,   0], [ 53,   0,   0],
    [ 56,   0,   0], [ 58,   0,   0], [ 61,   0,   0], [ 64,   0,   0],
    [ 66,   0,   0], [ 69,   0,   0], [ 72,   0,   0], [ 74,   0,   0],
    [ 77,   0,   0], [ 80,   0,   0], [ 82,   0,   0], [ 85,   0,   0],
    [ 88,   0,   0], [ 90,   0,   0], [ 93,   0,   0], [ 96,   0,   0],
    [ 98,   0,   0], [101,   0,   0], [104,   0,   0], [106,   0,   0],
    [109,   0,   0], [112,   0,   0], [114,   0,   0], [117,   0,   0],
    [120,   0,   0], [122,   0,   0], [125,   0,   0], [128,   0,   0],
    [130,   0,   0], [133,   0,   0], [135,   0,   0], [138,   0,   0],
    [141,   0,   0], [143,   0,   0], [146,   0,   0], [149,   0,   0],
    [151,   0,   0], [154,   0,   0], [157,   0,   0], [159,   0,   0],
    [162,   0,   0], [165,   0,   0], [167,   0,   0], [170,   0,   0],
    [173,   0,   0], [175,   0,   0], [178,   0,   0], [181,   0,   0],
    [183,   0,   0], [186,   0,   0], [189,   0,   0], [191,   0,   0],
    [194,   0,   0], [197,   0,   0], [199,   0,   0], [202,   0,   0],
    [205,   0,   0], [207,   0,   0], [210,   0,   0], [213,   0,   0],
    [215,   0,   0], [218,   0,   0], [220,   0,   0], [223,   0,   0],
    [226,   0,   0], [228,   0,   0], [231,   0,   0], [234,   0,   0],
    [236,   0,   0], [239,   0,   0], [242,   0,   0], [244,   0,   0],
    [247,   0,   0], [250,   0,   0], [252,   0,   0], [255,   0,   0],
    [255,   3,   0], [255,   5,   0], [255,   8,   0], [255,  11,   0],
    [255,  13,   0], [255,  16,   0], [255,  19,   0], [255,  21,   0],
    [255,  24,   0], [255,  27,   0], [255,  29,   0], [255,  32,   0],
    [255,  35,   0], [255,  37,   0], [255,  40,   0], [255,  43,   0],
    [255,  45,   0], [255,  48,   0], [255,  50,   0], [255,  53,   0],
    [255,  56,   0], [255,  58,   0], [255,  61,   0], [255,  64,   0],
    [255,  66,   0], [255,  69,   0], [255,  72,   0], [255,  74,   0],
    [255,  77,   0], [255,  80,   0], [255,  82,   0], [255,  85,   0],
    [255,  88,   0], [255,  90,   0], [255,  93,   0], [255,  96,   0],
    [255,  98,   0], [255, 101,   0], [255, 104,   0], [255, 106,   0],
    [255, 109,   0], [255, 112,   0], [255, 114,   0], [255, 117,   0],
    [255, 120,   0], [255, 122,   0], [255, 125,   0], [255, 128,   0],
    [255, 130,   0], [255, 133,   0], [255, 135,   0], [255, 138,   0],
    [255, 141,   0], [255, 143,   0], [255, 146,   0], [255, 149,   0],
    [255, 151,   0], [255, 154,   0], [255, 157,   0], [255, 159,   0],
    [255, 162,   0], [255, 165,   0], [255, 167,   0], [255, 170,   0],
    [255, 173,   0], [255, 175,   0], [255, 178,   0], [255, 181,   0],
    [255, 183,   0], [255, 186,   0], [255, 189,   0], [255, 191,   0],
    [255, 194,   0], [255, 197,   0], [255, 199,   0], [255, 202,   0],
    [255, 205,   0], [255, 207,   0], [255, 210,   0], [255, 213,   0],
    [255, 215,   0], [255, 218,   0], [255, 220,   0], [255, 223,   0],
    [255, 226,   0], [255, 228,   0], [255, 231,   0], [255, 234,   0],
    [255, 236,   0], [255, 239,   0], [255, 242,   0], [255, 244,   0],
    [255, 247,   0], [255, 250,   0], [255, 252,   0], [255, 255,   0],
    [255, 255,   4], [255, 255,   8], [255, 255,  12], [255, 255,  16],
    [255, 255,  20], [255, 255,  24], [255, 255,  28], [255, 255,  32],
    [255, 255,  36], [255, 255,  40], [255, 255,  44], [255, 255,  48],
    [255, 255,  52], [255, 255,  56], [255, 255,  60], [255, 255,  64],
    [255, 255,  68], [255, 255,  72], [255, 255,  76], [255, 255,  80],
    [255, 255,  84], [255, 255,  88], [255, 255,  92], [255, 255,  96],
    [255, 255, 100], [255, 255, 104], [255, 255, 108], [255, 255, 112],
    [255, 255, 116], [255, 255, 120], [255, 255, 124], [255, 255, 128],
    [255, 255, 131], [255, 255, 135], [255, 255, 139], [255, 255, 143],
    [255, 255, 147], [255, 255, 151], [255, 255, 155], [255, 255, 159],
    [255, 255, 163], [255, 255, 167], [255, 255, 171], [255, 255, 175],
    [255, 255, 179], [255, 255, 183], [255, 255, 187], [255, 255, 191],
    [255, 255, 195], [255, 255, 199], [255, 255, 203], [255, 255, 207],
    [255, 255, 211], [255, 255, 215], [255, 255, 219], [255, 255, 223],
    [255, 255, 227], [255, 255, 231], [255, 255, 235], [255, 255, 239],
    [255, 255, 243], [255, 255, 247], [255, 255, 251], [255, 255, 255],
];

/// Gray with a cool blue tint: (7 * gray + reversed hot) / 8.
#[rustfmt::skip]
pub static BONE: [[u8; 3]; 256] = [
    [  0,   0,   0], [  1,   1,   2], [  2,   2,   3], [  3,   3,   4],
    [  4,   4,   5], [  4,   4,   6], [  5,   5,   8], [  6,   6,   9],
    [  7,   7,  10], [  8,   8,  11], [  9,   9,  12], [ 10,  10,  14],
    [ 11,  11,  15], [ 11,  11,  16], [ 12,  12,  17], [ 13,  13,  18],
    [ 14,  14,  20], [ 15,  15,  21], [ 16,  16,  22], [ 17,  17,  23],
    [ 18,  18,  24], [ 18,  18,  26], [ 19,  19,  27], [ 20,  20,  28],
    [ 21,  21,  29], [ 22,  22,  31], [ 23,  23,  32], [ 24,  24,  33],
    [ 24,  24,  34], [ 25,  25,  35], [ 26,  26,  37], [ 27,  27,  38],
    [ 28,  28,  39], [ 29,  29,  40], [ 30,  30,  41], [ 31,  31,  43],
    [ 32,  32,  44], [ 32,  32,  45], [ 33,  33,  46], [ 34,  34,  47],
    [ 35,  35,  49], [ 36,  36,  50], [ 37,  37,  51], [ 38,  38,  52],
    [ 39,  39,  53], [ 39,  39,  55], [ 40,  40,  56], [ 41,  41,  57],
    [ 42,  42,  58], [ 43,  43,  59], [ 44,  44,  61], [ 45,  45,  62],
    [ 46,  46,  63], [ 46,  46,  64], [ 47,  47,  66], [ 48,  48,  67],
    [ 49,  49,  68], [ 50,  50,  69], [ 51,  51,  70], [ 52,  52,  72],
    [ 53,  53,  73], [ 53,  53,  74], [ 54,  54,  75], [ 55,  55,  76],
    [ 56,  56,  78], [ 57,  57,  79], [ 58,  58,  80], [ 59,  59,  81],
    [ 60,  60,  82], [ 60,  60,  84], [ 61,  61,  85], [ 62,  62,  86],
    [ 63,  63,  87], [ 64,  64,  88], [ 65,  65,  90], [ 66,  66,  91],
    [ 67,  67,  92], [ 67,  67,  93], [ 68,  68,  94], [ 69,  69,  96],
    [ 70,  70,  97], [ 71,  71,  98], [ 72,  72,  99], [ 73,  73, 101],
    [ 74,  74, 102], [ 74,  74, 103], [ 75,  75, 104], [ 76,  76, 105],
    [ 77,  77, 107], [ 78,  78, 108], [ 79,  79, 109], [ 80,  80, 110],
    [ 81,  81, 111], [ 81,  81, 113], [ 82,  82, 114], [ 83,  83, 115],
    [ 84,  84, 116], [ 85,  86, 117], [ 86,  87, 118], [ 87,  88, 119],
    [ 88,  89, 119], [ 88,  90, 120], [ 89,  92, 121], [ 90,  93, 122],
    [ 91,  94, 123], [ 92,  95, 124], [ 93,  96, 125], [ 94,  98, 126],
    [ 95,  99, 126], [ 95, 100, 127], [ 96, 101, 128], [ 97, 102, 129],
    [ 98, 104, 130], [ 99, 105, 131], [100, 106, 132], [101, 107, 132],
    [102, 108, 133], [102, 110, 134], [103, 111, 135], [104, 112, 136],
    [105, 113, 137], [106, 115, 138], [107, 116, 139], [108, 117, 140],
    [109, 118, 140], [109, 119, 141], [110, 121, 142], [111, 122, 143],
    [112, 123, 144], [113, 124, 145], [114, 125, 146], [115, 127, 147],
    [116, 128, 147], [116, 129, 148], [117, 130, 149], [118, 131, 150],
    [119, 133, 151], [120, 134, 152], [121, 135, 153], [122, 136, 154],
    [123, 137, 154], [123, 139, 155], [124, 140, 156], [125, 141, 157],
    [126, 142, 158], [127, 143, 159], [128, 145, 160], [129, 146, 161],
    [130, 147, 161], [130, 148, 162], [131, 150, 163], [132, 151, 164],
    [133, 152, 165], [134, 153, 166], [135, 154, 167], [136, 156, 168],
    [137, 157, 168], [137, 158, 169], [138, 159, 170], [139, 160, 171],
    [140, 162, 172], [141, 163, 173], [142, 164, 174], [143, 165, 175],
    [144, 166, 175], [144, 168, 176], [145, 169, 177], [146, 170, 178],
    [147, 171, 179], [148, 172, 180], [149, 174, 181], [150, 175, 181],
    [151, 176, 182], [151, 177, 183], [152, 178, 184], [153, 180, 185],
    [154, 181, 186], [155, 182, 187], [156, 183, 188], [157, 185, 188],
    [158, 186, 189], [158, 187, 190], [159, 188, 191], [160, 189, 192],
    [161, 191, 193], [162, 192, 194], [163, 193, 195], [164, 194, 195],
    [165, 195, 196], [165, 197, 197], [166, 198, 198], [167, 199, 199],
    [168, 200, 200], [170, 201, 201], [171, 202, 202], [173, 203, 203],
    [174, 203, 203], [175, 204, 204], [177, 205, 205], [178, 206, 206],
    [179, 207, 207], [181, 208, 208], [182, 209, 209], [184, 210, 210],
    [185, 210, 210], [186, 211, 211], [188, 212, 212], [189, 213, 213],
    [190, 214, 214], [192, 215, 215], [193, 216, 216], [195, 217, 217],
    [196, 217, 217], [197, 218, 218], [199, 219, 219], [200, 220, 220],
    [201, 221, 221], [203, 222, 222], [204, 223, 223], [206, 224, 224],
    [207, 224, 224], [208, 225, 225], [210, 226, 226], [211, 227, 227],
    [212, 228, 228], [214, 229, 229], [215, 230, 230], [217, 230, 230],
    [218, 231, 231], [219, 232, 232], [221, 233, 233], [222, 234, 234],
    [223, 235, 235], [225, 236, 236], [226, 237, 237], [228, 237, 237],
    [229, 238, 238], [230, 239, 239], [232, 240, 240], [233, 241, 241],
    [234, 242, 242], [236, 243, 243], [237, 244, 244], [239, 244, 244],
    [240, 245, 245], [241, 246, 246], [243, 247, 247], [244, 248, 248],
    [245, 249, 249], [247, 250, 250], [248, 251, 251], [250, 251, 251],
    [251, 252, 252], [252, 253, 253], [254, 254, 254], [255, 255, 255],
];

