// SidSort - core/extract.rs
//
// Per-variant metadata extraction from raw filenames.
//
// Every rule here is a fixed-offset substring rule on the filename, not
// general date parsing.  The offsets are format-specific and deliberately
// NOT unified into one generic parser: each legacy convention gets its own
// documented slice positions behind the FormatVariant dispatch.
//
// Known limitation, kept on purpose: the LegacyDat and ColinClementsSpd
// century completion hardcodes "20xx" and will misfile genuine 19xx data.

use crate::core::model::{Extraction, FormatVariant, NameParts, ObservationDate};
use crate::util::error::ExtractError;

/// Extract the observation date (and any variant-specific name fragments)
/// from `filename`.
///
/// Failures are fatal for this file only; the caller records the filename
/// in the skip report and continues.
pub fn extract(filename: &str, variant: FormatVariant) -> Result<Extraction, ExtractError> {
    match variant {
        FormatVariant::LegacyDat => extract_dat(filename),
        FormatVariant::ColinClementsSpd => extract_spd(filename),
        FormatVariant::StaribusXml => extract_xml(filename),
        FormatVariant::GenericCsv => extract_csv(filename),
        FormatVariant::Unrecognized => Err(ExtractError::Unclassified {
            filename: filename.to_string(),
        }),
    }
}

// =============================================================================
// Per-variant rules
// =============================================================================

/// LegacyDat: `YYYYMMDD...dat`.
///
/// year = chars[0..4] verbatim (the "long year" is authoritative for both
/// the directory and the canonical name), month = chars[4..6],
/// day = chars[6..8].
fn extract_dat(filename: &str) -> Result<Extraction, ExtractError> {
    let year = parse_digits::<u16>(field(filename, 0, 4)?, filename, "year")?;
    let month = parse_digits::<u8>(field(filename, 4, 6)?, filename, "month")?;
    let day = parse_digits::<u8>(field(filename, 6, 8)?, filename, "day")?;
    Ok(Extraction {
        date: ObservationDate { year, month, day },
        parts: NameParts::Dat,
    })
}

/// ColinClementsSpd: `XXYYMMDD...spd` or `XXYYYYMMDD...spd`.
///
/// The year width is detected by testing chars[2..4] == "20": if so the
/// stem carries a 4-digit year and month/day shift to [6..8]/[8..10];
/// otherwise a 2-digit year at [2..4] gets an implicit "20" century and
/// month/day sit at [4..6]/[6..8].  The stem (filename minus the leading
/// 2 characters and trailing 4-character extension) is captured
/// century-completed for the canonical name.
fn extract_spd(filename: &str) -> Result<Extraction, ExtractError> {
    let marker = field(filename, 2, 4)?;
    let (year, month, day, stem) = if marker == "20" {
        let year = parse_digits::<u16>(field(filename, 2, 6)?, filename, "year")?;
        let month = parse_digits::<u8>(field(filename, 6, 8)?, filename, "month")?;
        let day = parse_digits::<u8>(field(filename, 8, 10)?, filename, "day")?;
        (year, month, day, spd_stem(filename)?.to_string())
    } else {
        let year2 = parse_digits::<u16>(marker, filename, "year")?;
        let month = parse_digits::<u8>(field(filename, 4, 6)?, filename, "month")?;
        let day = parse_digits::<u8>(field(filename, 6, 8)?, filename, "day")?;
        (2000 + year2, month, day, format!("20{}", spd_stem(filename)?))
    };
    Ok(Extraction {
        date: ObservationDate { year, month, day },
        parts: NameParts::Spd { stem },
    })
}

/// StaribusXml: `<instrument>_<channel>_<YYYYMMDD>_<session>.xml`.
///
/// The filename is underscore-delimited; token[2] carries the 8-digit
/// date block, and tokens 0, 1 and 3 (minus its own extension) are
/// preserved verbatim for the output name.
fn extract_xml(filename: &str) -> Result<Extraction, ExtractError> {
    let tokens: Vec<&str> = filename.split('_').collect();
    if tokens.len() < 4 {
        return Err(ExtractError::MissingTokens {
            filename: filename.to_string(),
            found: tokens.len(),
            needed: 4,
        });
    }

    let date_token = tokens[2];
    let year = parse_digits::<u16>(field(date_token, 0, 4)?, filename, "year")?;
    let month = parse_digits::<u8>(field(date_token, 4, 6)?, filename, "month")?;
    let day = parse_digits::<u8>(field(date_token, 6, 8)?, filename, "day")?;

    let session = strip_last_4(tokens[3]).ok_or_else(|| ExtractError::TooShort {
        filename: filename.to_string(),
        needed: 4,
    })?;

    Ok(Extraction {
        date: ObservationDate { year, month, day },
        parts: NameParts::Xml {
            date_token: date_token.to_string(),
            session: session.to_string(),
            instrument: tokens[0].to_string(),
            channel: tokens[1].to_string(),
        },
    })
}

/// GenericCsv: `UTYYYYMMDD...csv`, already in repository form.
///
/// year = chars[2..6], month = chars[6..8], day = chars[8..10]; the
/// original filename is kept unchanged as the destination name.
fn extract_csv(filename: &str) -> Result<Extraction, ExtractError> {
    let year = parse_digits::<u16>(field(filename, 2, 6)?, filename, "year")?;
    let month = parse_digits::<u8>(field(filename, 6, 8)?, filename, "month")?;
    let day = parse_digits::<u8>(field(filename, 8, 10)?, filename, "day")?;
    Ok(Extraction {
        date: ObservationDate { year, month, day },
        parts: NameParts::Csv {
            original: filename.to_string(),
        },
    })
}

// =============================================================================
// Slice helpers
// =============================================================================

/// Fixed-offset field access; `TooShort` when the filename does not reach
/// `end` (or the slice falls off a character boundary).
fn field(s: &str, start: usize, end: usize) -> Result<&str, ExtractError> {
    s.get(start..end).ok_or_else(|| ExtractError::TooShort {
        filename: s.to_string(),
        needed: end,
    })
}

/// Parse a digit field, preserving the raw slice in the error.
fn parse_digits<T: std::str::FromStr>(
    raw: &str,
    filename: &str,
    fieldname: &'static str,
) -> Result<T, ExtractError> {
    raw.parse().map_err(|_| ExtractError::BadDigits {
        filename: filename.to_string(),
        field: fieldname,
        raw: raw.to_string(),
    })
}

/// The spd stem: filename minus leading 2 characters and the trailing
/// 4-character extension.
fn spd_stem(filename: &str) -> Result<&str, ExtractError> {
    let end = filename
        .len()
        .checked_sub(4)
        .filter(|&end| end >= 2)
        .ok_or_else(|| ExtractError::TooShort {
            filename: filename.to_string(),
            needed: 6,
        })?;
    filename.get(2..end).ok_or_else(|| ExtractError::TooShort {
        filename: filename.to_string(),
        needed: end,
    })
}

/// Drop the last 4 characters (a `.ext` suffix) from a token.
fn strip_last_4(token: &str) -> Option<&str> {
    token.len().checked_sub(4).and_then(|end| token.get(..end))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: u16, month: u8, day: u8) -> ObservationDate {
        ObservationDate { year, month, day }
    }

    #[test]
    fn test_dat_slices_date_from_prefix() {
        let x = extract("20210607_ABC123.dat", FormatVariant::LegacyDat).unwrap();
        assert_eq!(x.date, date(2021, 6, 7));
        assert_eq!(x.parts, NameParts::Dat);
    }

    #[test]
    fn test_dat_too_short() {
        let err = extract("2021.dat", FormatVariant::LegacyDat).unwrap_err();
        // "2021.dat" is 8 chars so the slices succeed; ".d" is the month.
        assert!(matches!(err, ExtractError::BadDigits { field: "month", .. }));

        let err = extract("20", FormatVariant::LegacyDat).unwrap_err();
        assert!(matches!(err, ExtractError::TooShort { needed: 4, .. }));
    }

    #[test]
    fn test_dat_non_numeric_prefix() {
        let err = extract("short.dat", FormatVariant::LegacyDat).unwrap_err();
        assert!(matches!(err, ExtractError::BadDigits { field: "year", .. }));
    }

    #[test]
    fn test_spd_four_digit_year_branch() {
        // chars[2..4] == "20" selects the 4-digit branch.
        let x = extract("AA20210115rest.spd", FormatVariant::ColinClementsSpd).unwrap();
        assert_eq!(x.date, date(2021, 1, 15));
        assert_eq!(
            x.parts,
            NameParts::Spd {
                stem: "20210115rest".to_string()
            }
        );
    }

    #[test]
    fn test_spd_two_digit_year_branch() {
        // chars[2..4] == "21" selects the 2-digit branch with an implicit
        // "20" century; the stem is century-completed.
        let x = extract("AA210115rest.spd", FormatVariant::ColinClementsSpd).unwrap();
        assert_eq!(x.date, date(2021, 1, 15));
        assert_eq!(
            x.parts,
            NameParts::Spd {
                stem: "20210115rest".to_string()
            }
        );
    }

    #[test]
    fn test_spd_branch_chosen_only_by_marker() {
        // "19" is NOT treated as a century marker; it becomes year 2019.
        let x = extract("AA190623eve.spd", FormatVariant::ColinClementsSpd).unwrap();
        assert_eq!(x.date, date(2019, 6, 23));
    }

    #[test]
    fn test_spd_too_short() {
        let err = extract("X.s", FormatVariant::ColinClementsSpd).unwrap_err();
        assert!(matches!(err, ExtractError::TooShort { .. }));

        // Long enough for the date fields but too short for the stem.
        let err = extract("21011", FormatVariant::ColinClementsSpd).unwrap_err();
        assert!(matches!(err, ExtractError::TooShort { .. }));
    }

    #[test]
    fn test_xml_tokens_and_date() {
        let x = extract(
            "Staribus4ChannelLogger_RawData_20190101_000021.xml",
            FormatVariant::StaribusXml,
        )
        .unwrap();
        assert_eq!(x.date, date(2019, 1, 1));
        assert_eq!(
            x.parts,
            NameParts::Xml {
                date_token: "20190101".to_string(),
                session: "000021".to_string(),
                instrument: "Staribus4ChannelLogger".to_string(),
                channel: "RawData".to_string(),
            }
        );
    }

    #[test]
    fn test_xml_missing_tokens() {
        let err = extract("Logger_20190101.xml", FormatVariant::StaribusXml).unwrap_err();
        assert!(matches!(
            err,
            ExtractError::MissingTokens {
                found: 2,
                needed: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_xml_short_date_token() {
        let err = extract("A_B_2019_000021.xml", FormatVariant::StaribusXml).unwrap_err();
        assert!(matches!(err, ExtractError::TooShort { .. }));
    }

    #[test]
    fn test_csv_date_offsets() {
        let x = extract("UT20110307_UKRAA_Rx_VLF_SDawes.csv", FormatVariant::GenericCsv).unwrap();
        assert_eq!(x.date, date(2011, 3, 7));
        assert_eq!(
            x.parts,
            NameParts::Csv {
                original: "UT20110307_UKRAA_Rx_VLF_SDawes.csv".to_string()
            }
        );
    }

    #[test]
    fn test_csv_too_short() {
        let err = extract("UT2011.csv", FormatVariant::GenericCsv).unwrap_err();
        // 10 chars long, so the slices land on "11.c" etc.
        assert!(matches!(err, ExtractError::BadDigits { .. }));

        // "UT.csv" is 6 chars, so the year slice [2..6] still succeeds
        // (as ".csv") and fails the digit parse, not the length check.
        let err = extract("UT.csv", FormatVariant::GenericCsv).unwrap_err();
        assert!(matches!(err, ExtractError::BadDigits { field: "year", .. }));

        // Shorter than the year slice itself.
        let err = extract("U", FormatVariant::GenericCsv).unwrap_err();
        assert!(matches!(err, ExtractError::TooShort { needed: 6, .. }));
    }

    #[test]
    fn test_unrecognized_variant_is_an_error() {
        let err = extract("whatever.txt", FormatVariant::Unrecognized).unwrap_err();
        assert!(matches!(err, ExtractError::Unclassified { .. }));
    }

    #[test]
    fn test_out_of_range_date_flows_through() {
        // Month 13 / day 32 are not validated; the filenames are trusted.
        let x = extract("20211332_X.dat", FormatVariant::LegacyDat).unwrap();
        assert_eq!(x.date, date(2021, 13, 32));
    }
}
