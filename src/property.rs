use crate::error::Result;

/// The `Grapheme_Cluster_Break` classes the generator emits.
///
/// Each variant's discriminant is the numeric id the consuming library
/// stores in its table. The ids are a data contract: id 0 is reserved for
/// the consumer's "Any" default and is never emitted, and existing ids must
/// not change across regenerations.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GraphemeClusterBreak {
    CR = 1,
    LF = 2,
    Control = 3,
    Extend = 4,
    ZWJ = 5,
    RegionalIndicator = 6,
    Prepend = 7,
    SpacingMark = 8,
    L = 9,
    V = 10,
    T = 11,
    LV = 12,
    LVT = 13,
    ExtendedPictographic = 14,
}

impl GraphemeClusterBreak {
    /// The numeric id stored in the emitted table.
    pub fn id(self) -> u16 {
        self as u16
    }

    /// Resolve a property value name from `GraphemeBreakProperty.txt`.
    ///
    /// An unrecognized name is an error: it means the UCD and this
    /// enumeration have drifted out of sync, which needs a human looking at
    /// it rather than a silently skipped line.
    pub fn resolve(name: &str) -> Result<GraphemeClusterBreak> {
        use self::GraphemeClusterBreak::*;

        match name {
            "CR" => Ok(CR),
            "LF" => Ok(LF),
            "Control" => Ok(Control),
            "Extend" => Ok(Extend),
            "ZWJ" => Ok(ZWJ),
            "Regional_Indicator" => Ok(RegionalIndicator),
            "Prepend" => Ok(Prepend),
            "SpacingMark" => Ok(SpacingMark),
            "L" => Ok(L),
            "V" => Ok(V),
            "T" => Ok(T),
            "LV" => Ok(LV),
            "LVT" => Ok(LVT),
            "Extended_Pictographic" => Ok(ExtendedPictographic),
            _ => err!("unknown Grapheme_Cluster_Break value: {:?}", name),
        }
    }
}

/// The `Line_Break` classes the generator emits.
///
/// As with [`GraphemeClusterBreak`], the discriminants are the ids the
/// consuming library compiled in; new classes added by a Unicode revision
/// get new ids at the end, never renumbering.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineBreak {
    AL = 1,
    BA = 2,
    BB = 3,
    B2 = 4,
    BK = 5,
    CB = 6,
    CL = 7,
    CM = 8,
    CP = 9,
    CR = 10,
    EB = 11,
    EM = 12,
    EX = 13,
    GL = 14,
    H2 = 15,
    H3 = 16,
    HY = 17,
    ID = 18,
    HL = 19,
    IN = 20,
    IS = 21,
    JL = 22,
    JT = 23,
    JV = 24,
    LF = 25,
    NL = 26,
    NS = 27,
    NU = 28,
    OP = 29,
    PO = 30,
    PR = 31,
    QU = 32,
    RI = 33,
    SP = 34,
    SY = 35,
    WJ = 36,
    ZW = 37,
    ZWJ = 38,
}

impl LineBreak {
    /// The numeric id stored in the emitted table.
    pub fn id(self) -> u16 {
        self as u16
    }

    /// Resolve a `Line_Break` value from `LineBreak.txt`, applying the
    /// manual rules of UAX #14 LB1 for classes the consumer does not carry:
    ///
    /// - `AI`, `SG` and `XX` resolve to `AL`;
    /// - `CJ` resolves to `NS`;
    /// - `SA` resolves to `CM` when the entry's general category is `Mn`
    ///   or `Mc`, and to `AL` otherwise. `LineBreak.txt` embeds the general
    ///   category as the first field of the line's inline comment, which is
    ///   passed in here; an `SA` line without a comment is an error.
    pub fn resolve(name: &str, comment: Option<&str>) -> Result<LineBreak> {
        use self::LineBreak::*;

        match name {
            "AI" | "SG" | "XX" => Ok(AL),
            "CJ" => Ok(NS),
            "SA" => {
                let comment = match comment {
                    Some(c) => c,
                    None => {
                        return err!(
                            "cannot resolve SA without the general category \
                             comment"
                        )
                    }
                };
                match comment.get(..2) {
                    Some("Mn") | Some("Mc") => Ok(CM),
                    _ => Ok(AL),
                }
            }
            _ => LineBreak::from_name(name),
        }
    }

    fn from_name(name: &str) -> Result<LineBreak> {
        use self::LineBreak::*;

        match name {
            "AL" => Ok(AL),
            "BA" => Ok(BA),
            "BB" => Ok(BB),
            "B2" => Ok(B2),
            "BK" => Ok(BK),
            "CB" => Ok(CB),
            "CL" => Ok(CL),
            "CM" => Ok(CM),
            "CP" => Ok(CP),
            "CR" => Ok(CR),
            "EB" => Ok(EB),
            "EM" => Ok(EM),
            "EX" => Ok(EX),
            "GL" => Ok(GL),
            "H2" => Ok(H2),
            "H3" => Ok(H3),
            "HY" => Ok(HY),
            "ID" => Ok(ID),
            "HL" => Ok(HL),
            "IN" => Ok(IN),
            "IS" => Ok(IS),
            "JL" => Ok(JL),
            "JT" => Ok(JT),
            "JV" => Ok(JV),
            "LF" => Ok(LF),
            "NL" => Ok(NL),
            "NS" => Ok(NS),
            "NU" => Ok(NU),
            "OP" => Ok(OP),
            "PO" => Ok(PO),
            "PR" => Ok(PR),
            "QU" => Ok(QU),
            "RI" => Ok(RI),
            "SP" => Ok(SP),
            "SY" => Ok(SY),
            "WJ" => Ok(WJ),
            "ZW" => Ok(ZW),
            "ZWJ" => Ok(ZWJ),
            _ => err!("unknown Line_Break value: {:?}", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{GraphemeClusterBreak, LineBreak};

    #[test]
    fn grapheme_ids_are_stable() {
        assert_eq!(GraphemeClusterBreak::CR.id(), 1);
        assert_eq!(GraphemeClusterBreak::SpacingMark.id(), 8);
        assert_eq!(GraphemeClusterBreak::ExtendedPictographic.id(), 14);
    }

    #[test]
    fn grapheme_resolution() {
        assert_eq!(
            GraphemeClusterBreak::resolve("Regional_Indicator").unwrap(),
            GraphemeClusterBreak::RegionalIndicator
        );
        assert!(GraphemeClusterBreak::resolve("ZZ").is_err());
        // Value names are case sensitive, like the UCD itself.
        assert!(GraphemeClusterBreak::resolve("control").is_err());
    }

    #[test]
    fn line_break_ids_are_stable() {
        assert_eq!(LineBreak::AL.id(), 1);
        assert_eq!(LineBreak::ID.id(), 18);
        assert_eq!(LineBreak::HL.id(), 19);
        assert_eq!(LineBreak::ZWJ.id(), 38);
    }

    #[test]
    fn line_break_overrides() {
        assert_eq!(LineBreak::resolve("AI", None).unwrap(), LineBreak::AL);
        assert_eq!(LineBreak::resolve("SG", None).unwrap(), LineBreak::AL);
        assert_eq!(LineBreak::resolve("XX", None).unwrap(), LineBreak::AL);
        assert_eq!(LineBreak::resolve("CJ", None).unwrap(), LineBreak::NS);
    }

    #[test]
    fn line_break_sa_uses_general_category() {
        let mn = Some("Mn       THAI CHARACTER MAI HAN-AKAT");
        let mc = Some("Mc   [2] MYANMAR VOWEL SIGN E..MYANMAR VOWEL SIGN AI");
        let lo = Some("Lo  [44] THAI CHARACTER KO KAI..THAI CHARACTER HO NOKHUK");
        assert_eq!(LineBreak::resolve("SA", mn).unwrap(), LineBreak::CM);
        assert_eq!(LineBreak::resolve("SA", mc).unwrap(), LineBreak::CM);
        assert_eq!(LineBreak::resolve("SA", lo).unwrap(), LineBreak::AL);
        assert_eq!(
            LineBreak::resolve("SA", Some("Lu X")).unwrap(),
            LineBreak::AL
        );
        assert!(LineBreak::resolve("SA", None).is_err());
    }

    #[test]
    fn line_break_unknown_is_fatal() {
        assert!(LineBreak::resolve("QQ", None).is_err());
    }
}
