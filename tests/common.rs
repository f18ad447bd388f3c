//! Reference patches shared by the integration tests.
#![allow(dead_code)]

use genmdm::CcMap;

/// Two instruments as exported by GenMDM
pub const GENM_TEXT: &str = "0, 4 0 0 4 3 97 97 100 100 6 0 6 0 31 31 24 24 16 13 12 12 2 2 8 8 4 4 2 4 0 0 0 0 4 3 1 1 2 2 6 6 0 0 0 0 0 0 0 0 01_capcom_logo_37.tfi;
1, 0 0 0 0 3 107 103 107 100 5 6 4 6 31 26 28 31 20 16 20 7 3 4 2 3 6 0 5 1 2 1 1 2 4 2 6 1 3 3 3 6 0 0 0 0 0 0 0 0 03_player_select_12.tfi;";

/// Same as [`GENM_TEXT`] but op1Detune is 100
pub const BAD_GENM_TEXT: &str = "0, 4 0 0 4 3 97 97 100 100 100 0 6 0 31 31 24 24 16 13 12 12 2 2 8 8 4 4 2 4 0 0 0 0 4 3 1 1 2 2 6 6 0 0 0 0 0 0 0 0 01_capcom_logo_37.tfi;
1, 0 0 0 0 3 107 103 107 100 5 6 4 6 31 26 28 31 20 16 20 7 3 4 2 3 6 0 5 1 2 1 1 2 4 2 6 1 3 3 3 6 0 0 0 0 0 0 0 0 03_player_select_12.tfi;";

/// TFI of the first instrument in [`GENM_TEXT`]
pub const CAPCOM_TFI: [u8; 42] = [
    4, 4, 4, 6, 30, 0, 31, 16, 2, 2, 4, 0, 4, 0, 30, 0, 31, 13, 2, 2, 3, 0, 2, 6, 27, 0, 24, 12, 8,
    6, 1, 0, 4, 0, 27, 0, 24, 12, 8, 6, 1, 0,
];

/// GenMDM CC values of the first instrument in [`GENM_TEXT`]
pub fn capcom_cc_map() -> CcMap {
    CcMap::from([
        (14, 73),
        (75, 0),
        (76, 0),
        (15, 73),
        (77, 127),
        (16, 97),
        (17, 97),
        (18, 100),
        (19, 100),
        (24, 109),
        (25, 0),
        (26, 109),
        (27, 0),
        (43, 127),
        (44, 127),
        (45, 98),
        (46, 98),
        (47, 66),
        (48, 53),
        (49, 49),
        (50, 49),
        (51, 8),
        (52, 8),
        (53, 33),
        (54, 33),
        (20, 34),
        (21, 34),
        (22, 17),
        (23, 34),
        (39, 0),
        (40, 0),
        (41, 0),
        (42, 0),
        (55, 34),
        (56, 25),
        (57, 8),
        (58, 8),
        (59, 17),
        (60, 17),
        (61, 51),
        (62, 51),
        (70, 0),
        (71, 0),
        (72, 0),
        (73, 0),
        (90, 0),
        (91, 0),
        (92, 0),
        (93, 0),
    ])
}

/// Y12 dump of "Time Trax (proto"
pub fn time_trax_y12() -> Vec<u8> {
    let operators: [[u8; 6]; 4] = [
        [100, 15, 5, 31, 8, 9],
        [51, 14, 5, 31, 8, 9],
        [4, 21, 31, 31, 0, 9],
        [3, 21, 31, 31, 0, 9],
    ];

    let mut data = Vec::with_capacity(128);
    for op in operators {
        data.extend_from_slice(&op);
        data.extend_from_slice(&[0; 10]);
    }
    data.extend_from_slice(&[4, 5]);
    data.extend_from_slice(&[0; 14]);
    for _ in 0..3 {
        data.extend_from_slice(b"Time Trax (proto");
    }

    assert_eq!(data.len(), 128);
    data
}

/// TFI converted from [`time_trax_y12`]
pub const TIME_TRAX_TFI: [u8; 42] = [
    4, 5, 4, 1, 15, 0, 5, 31, 8, 9, 0, 0, 3, 6, 14, 0, 5, 31, 8, 9, 0, 0, 4, 3, 21, 0, 31, 31, 0,
    9, 0, 0, 3, 3, 21, 0, 31, 31, 0, 9, 0, 0,
];
