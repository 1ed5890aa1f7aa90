//! Norm tables for the ECCD checklist.
//!
//! Scaled scores run 1-19 (mean 10, SD 3). Every per-domain table starts at
//! a raw count of zero and ends at the domain's item count, with no gaps.

use crate::age::AgeBand;
use crate::domain::Domain;
use crate::scoring::{ScoreBin, StandardScoreEntry};

const fn bin(min: u32, max: u32, score: u32) -> ScoreBin {
    ScoreBin::new(min, max, score)
}

const fn entry(sum: u32, score: u32) -> StandardScoreEntry {
    StandardScoreEntry { sum, score }
}

type BandTable = [(Domain, &'static [ScoreBin]); 7];

#[rustfmt::skip]
static AGE_3_1_TO_4_0: BandTable = [
    (
        Domain::GrossMotor,
        &[
            bin(0, 3, 1), bin(4, 4, 2), bin(5, 5, 4), bin(6, 6, 5), bin(7, 7, 6),
            bin(8, 8, 8), bin(9, 9, 9), bin(10, 10, 11), bin(11, 11, 12),
            bin(12, 12, 14), bin(13, 13, 15),
        ],
    ),
    (
        Domain::FineMotor,
        &[
            bin(0, 0, 1), bin(1, 1, 3), bin(2, 2, 4), bin(3, 3, 6), bin(4, 4, 7),
            bin(5, 5, 9), bin(6, 6, 10), bin(7, 7, 12), bin(8, 8, 13),
            bin(9, 9, 15), bin(10, 10, 16), bin(11, 11, 18),
        ],
    ),
    (
        Domain::SelfHelp,
        &[
            bin(0, 5, 1), bin(6, 6, 2), bin(7, 8, 3), bin(9, 9, 4), bin(10, 10, 5),
            bin(11, 12, 6), bin(13, 13, 7), bin(14, 14, 8), bin(15, 16, 9),
            bin(17, 17, 10), bin(18, 18, 11), bin(19, 20, 12), bin(21, 21, 13),
            bin(22, 22, 14), bin(23, 24, 15), bin(25, 25, 16), bin(26, 26, 17),
            bin(27, 27, 18),
        ],
    ),
    (
        Domain::ReceptiveLanguage,
        &[
            bin(0, 0, 3), bin(1, 1, 5), bin(2, 2, 8), bin(3, 3, 10), bin(4, 4, 13),
            bin(5, 5, 15),
        ],
    ),
    (
        Domain::ExpressiveLanguage,
        &[
            bin(0, 0, 1), bin(1, 1, 3), bin(2, 2, 4), bin(3, 3, 6), bin(4, 4, 8),
            bin(5, 5, 10), bin(6, 6, 12), bin(7, 7, 14), bin(8, 8, 16),
        ],
    ),
    (
        Domain::Cognitive,
        &[
            bin(0, 0, 2), bin(1, 1, 3), bin(2, 2, 4), bin(3, 3, 5), bin(4, 4, 6),
            bin(5, 6, 7), bin(7, 7, 8), bin(8, 8, 9), bin(9, 9, 10),
            bin(10, 10, 11), bin(11, 11, 12), bin(12, 13, 13), bin(14, 14, 14),
            bin(15, 15, 15), bin(16, 16, 16), bin(17, 17, 17), bin(18, 18, 18),
            bin(19, 21, 19),
        ],
    ),
    (
        Domain::SocialEmotional,
        &[
            bin(0, 6, 1), bin(7, 7, 2), bin(8, 9, 3), bin(10, 10, 4), bin(11, 11, 5),
            bin(12, 12, 6), bin(13, 13, 7), bin(14, 15, 8), bin(16, 16, 9),
            bin(17, 17, 10), bin(18, 18, 11), bin(19, 19, 12), bin(20, 21, 13),
            bin(22, 22, 14), bin(23, 23, 15), bin(24, 24, 16),
        ],
    ),
];

#[rustfmt::skip]
static AGE_4_1_TO_5_0: BandTable = [
    (
        Domain::GrossMotor,
        &[
            bin(0, 6, 1), bin(7, 7, 3), bin(8, 8, 4), bin(9, 9, 6), bin(10, 10, 8),
            bin(11, 11, 10), bin(12, 12, 12), bin(13, 13, 14),
        ],
    ),
    (
        Domain::FineMotor,
        &[
            bin(0, 2, 1), bin(3, 3, 2), bin(4, 4, 3), bin(5, 5, 5), bin(6, 6, 7),
            bin(7, 7, 8), bin(8, 8, 10), bin(9, 9, 12), bin(10, 10, 13),
            bin(11, 11, 15),
        ],
    ),
    (
        Domain::SelfHelp,
        &[
            bin(0, 11, 1), bin(12, 12, 2), bin(13, 13, 3), bin(14, 14, 4),
            bin(15, 15, 5), bin(16, 17, 6), bin(18, 18, 7), bin(19, 19, 8),
            bin(20, 20, 9), bin(21, 21, 10), bin(22, 22, 11), bin(23, 23, 12),
            bin(24, 24, 13), bin(25, 26, 14), bin(27, 27, 15),
        ],
    ),
    (
        Domain::ReceptiveLanguage,
        &[bin(0, 1, 1), bin(2, 2, 3), bin(3, 3, 7), bin(4, 4, 10), bin(5, 5, 13)],
    ),
    (
        Domain::ExpressiveLanguage,
        &[
            bin(0, 3, 1), bin(4, 4, 4), bin(5, 5, 6), bin(6, 6, 9), bin(7, 7, 11),
            bin(8, 8, 14),
        ],
    ),
    (
        Domain::Cognitive,
        &[
            bin(0, 3, 1), bin(4, 4, 2), bin(5, 5, 3), bin(6, 6, 4), bin(7, 7, 5),
            bin(8, 9, 6), bin(10, 10, 7), bin(11, 11, 8), bin(12, 12, 9),
            bin(13, 13, 10), bin(14, 14, 11), bin(15, 15, 12), bin(16, 16, 13),
            bin(17, 18, 14), bin(19, 19, 15), bin(20, 20, 16), bin(21, 21, 17),
        ],
    ),
    (
        Domain::SocialEmotional,
        &[
            bin(0, 10, 1), bin(11, 11, 2), bin(12, 12, 3), bin(13, 13, 4),
            bin(14, 14, 5), bin(15, 15, 6), bin(16, 16, 7), bin(17, 17, 8),
            bin(18, 18, 9), bin(19, 19, 10), bin(20, 20, 11), bin(21, 21, 12),
            bin(22, 22, 13), bin(23, 23, 14), bin(24, 24, 15),
        ],
    ),
];

#[rustfmt::skip]
static AGE_5_1_TO_5_11: BandTable = [
    (
        Domain::GrossMotor,
        &[
            bin(0, 8, 1), bin(9, 9, 2), bin(10, 10, 5), bin(11, 11, 7),
            bin(12, 12, 10), bin(13, 13, 13),
        ],
    ),
    (
        Domain::FineMotor,
        &[
            bin(0, 5, 1), bin(6, 6, 2), bin(7, 7, 4), bin(8, 8, 7), bin(9, 9, 9),
            bin(10, 10, 11), bin(11, 11, 13),
        ],
    ),
    (
        Domain::SelfHelp,
        &[
            bin(0, 16, 1), bin(17, 17, 2), bin(18, 18, 3), bin(19, 19, 4),
            bin(20, 20, 5), bin(21, 21, 7), bin(22, 22, 8), bin(23, 23, 9),
            bin(24, 24, 10), bin(25, 25, 11), bin(26, 26, 12), bin(27, 27, 13),
        ],
    ),
    (
        Domain::ReceptiveLanguage,
        &[bin(0, 2, 1), bin(3, 3, 3), bin(4, 4, 8), bin(5, 5, 13)],
    ),
    (
        Domain::ExpressiveLanguage,
        &[bin(0, 5, 1), bin(6, 6, 5), bin(7, 7, 9), bin(8, 8, 13)],
    ),
    (
        Domain::Cognitive,
        &[
            bin(0, 8, 1), bin(9, 9, 2), bin(10, 10, 3), bin(11, 11, 4),
            bin(12, 12, 5), bin(13, 13, 6), bin(14, 14, 7), bin(15, 15, 8),
            bin(16, 16, 9), bin(17, 17, 10), bin(18, 18, 11), bin(19, 19, 12),
            bin(20, 20, 13), bin(21, 21, 14),
        ],
    ),
    (
        Domain::SocialEmotional,
        &[
            bin(0, 14, 1), bin(15, 15, 2), bin(16, 16, 3), bin(17, 17, 4),
            bin(18, 18, 6), bin(19, 19, 7), bin(20, 20, 8), bin(21, 21, 9),
            bin(22, 22, 11), bin(23, 23, 12), bin(24, 24, 13),
        ],
    ),
];

/// Sum of scaled scores (29-98) to standard score. Sums outside the table
/// clamp to its first or last row.
#[rustfmt::skip]
pub static STANDARD_SCORES: &[StandardScoreEntry] = &[
    entry(29, 37), entry(30, 39), entry(31, 40), entry(32, 42), entry(33, 43),
    entry(34, 45), entry(35, 46), entry(36, 48), entry(37, 49), entry(38, 51),
    entry(39, 52), entry(40, 54), entry(41, 55), entry(42, 57), entry(43, 59),
    entry(44, 60), entry(45, 62), entry(46, 63), entry(47, 65), entry(48, 66),
    entry(49, 68), entry(50, 69), entry(51, 71), entry(52, 72), entry(53, 74),
    entry(54, 75), entry(55, 77), entry(56, 78), entry(57, 80), entry(58, 82),
    entry(59, 83), entry(60, 85), entry(61, 86), entry(62, 88), entry(63, 89),
    entry(64, 91), entry(65, 92), entry(66, 94), entry(67, 95), entry(68, 97),
    entry(69, 98), entry(70, 100), entry(71, 101), entry(72, 103), entry(73, 104),
    entry(74, 105), entry(75, 107), entry(76, 108), entry(77, 110), entry(78, 111),
    entry(79, 112), entry(80, 114), entry(81, 115), entry(82, 116), entry(83, 118),
    entry(84, 119), entry(85, 120), entry(86, 122), entry(87, 123), entry(88, 124),
    entry(89, 126), entry(90, 127), entry(91, 129), entry(92, 130), entry(93, 131),
    entry(94, 133), entry(95, 134), entry(96, 135), entry(97, 137), entry(98, 138),
];

fn band_table(band: AgeBand) -> &'static BandTable {
    match band {
        AgeBand::ThreeToFour => &AGE_3_1_TO_4_0,
        AgeBand::FourToFive => &AGE_4_1_TO_5_0,
        AgeBand::FiveToSix => &AGE_5_1_TO_5_11,
    }
}

/// Raw-score bins for `domain` in `band`, lowest first.
pub fn scaled_bins(band: AgeBand, domain: Domain) -> Option<&'static [ScoreBin]> {
    band_table(band)
        .iter()
        .find(|(d, _)| *d == domain)
        .map(|(_, bins)| *bins)
}

/// Highest raw count the table for `domain` in `band` can score.
pub fn ceiling(band: AgeBand, domain: Domain) -> Option<u32> {
    scaled_bins(band, domain)?.last().map(|bin| bin.max)
}
