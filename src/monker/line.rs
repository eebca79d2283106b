use super::action::Action;
use crate::Arbitrary;
use crate::Code;

/// ordered betting line recovered from a Monker range file stem.
///
/// order is chronological and must survive end-to-end: it fixes both the
/// nesting of the output directories and the character order of the output
/// file name.
#[derive(Debug, Default, Clone, Eq, Hash, PartialEq)]
pub struct Line(Vec<Action>);

impl Line {
    pub fn iter(&self) -> std::slice::Iter<'_, Action> {
        self.0.iter()
    }
}

/// stem parsing: split on `.`, read each component as a non-negative base-10
/// integer, decode each code in order. any unreadable component poisons the
/// whole stem.
impl TryFrom<&str> for Line {
    type Error = anyhow::Error;
    fn try_from(stem: &str) -> Result<Self, Self::Error> {
        stem.split('.')
            .map(|component| {
                component
                    .parse::<Code>()
                    .map_err(|_| {
                        anyhow::anyhow!(
                            "invalid Monker file name `{}`: could not parse `{}`",
                            stem,
                            component
                        )
                    })
                    .and_then(Action::try_from)
            })
            .collect::<Result<Vec<Action>, Self::Error>>()
            .map(Self)
    }
}

impl FromIterator<Action> for Line {
    fn from_iter<T: IntoIterator<Item = Action>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.iter().try_for_each(|action| write!(f, ".{}", action))
    }
}

impl Arbitrary for Line {
    fn random() -> Self {
        use rand::Rng;
        let n = rand::rng().random_range(1..=8);
        (0..n).map(|_| Action::random()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_betting_line() {
        let line = Line::try_from("2.1.0").expect("valid stem");
        assert_eq!(
            line.iter().copied().collect::<Vec<Action>>(),
            vec![Action::Pot, Action::Call, Action::Fold]
        );
        assert_eq!(line.to_string(), ".r(100%).c.f");
    }

    #[test]
    fn parse_single_ratio() {
        let line = Line::try_from("40025").expect("valid stem");
        assert_eq!(
            line.iter().copied().collect::<Vec<Action>>(),
            vec![Action::Ratio(25)]
        );
    }

    #[test]
    fn parse_single_blinds() {
        let line = Line::try_from("23").expect("valid stem");
        assert_eq!(
            line.iter().copied().collect::<Vec<Action>>(),
            vec![Action::Blinds(12)]
        );
    }

    #[test]
    fn parse_rejects_non_numeric_component() {
        let error = Line::try_from("2.x.0").expect_err("x is not a code");
        assert!(error.to_string().contains("`x`"));
        assert!(error.to_string().contains("2.x.0"));
    }

    #[test]
    fn parse_rejects_unassigned_code() {
        assert!(Line::try_from("2.11.0").is_err());
    }

    #[test]
    fn parse_rejects_empty_stem() {
        assert!(Line::try_from("").is_err());
    }

    #[test]
    fn parse_preserves_order() {
        let line = Line::random();
        let stem = line
            .iter()
            .map(|action| Code::from(*action).to_string())
            .collect::<Vec<String>>()
            .join(".");
        assert_eq!(line, Line::try_from(stem.as_str()).expect("valid stem"));
    }
}
