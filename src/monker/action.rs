use crate::Arbitrary;
use crate::Code;
use crate::Size;

/// one decoded betting action from a Monker range file name.
///
/// codes 0..=10 are Monker's fixed action table. larger codes encode raise
/// sizes linearly: 12..=40000 as small blinds above 11, anything above 40000
/// as percent of pot above 40000. code 11 belongs to no band.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq)]
pub enum Action {
    Fold,
    Call,
    Pot,
    Shove,
    Half,
    Min,
    Bet, // unconfirmed Monker semantics, kept verbatim
    Quarter,
    Double,
    ThreeQuarters,
    Percent, // unconfirmed Monker semantics, kept verbatim
    Blinds(Size),
    Ratio(Size),
}

impl Action {
    /// human-readable name, used as a directory segment in the Pio tree
    pub fn name(&self) -> String {
        match self {
            Self::Fold => "fold".to_string(),
            Self::Call => "call".to_string(),
            Self::Pot => "pot".to_string(),
            Self::Shove => "all-in".to_string(),
            Self::Half => "50%".to_string(),
            Self::Min => "min".to_string(),
            Self::Bet => "bet".to_string(),
            Self::Quarter => "25%".to_string(),
            Self::Double => "2x".to_string(),
            Self::ThreeQuarters => "75%".to_string(),
            Self::Percent => "%".to_string(),
            Self::Blinds(n) => format!("{}-sb", n),
            Self::Ratio(p) => format!("{}%", p),
        }
    }
}

/// Code decoding. the guards run in order and the first match wins: both
/// quantitative bands sit numerically above the fixed table, and 11 itself
/// falls through every guard.
impl TryFrom<Code> for Action {
    type Error = anyhow::Error;
    fn try_from(code: Code) -> Result<Self, Self::Error> {
        if code > 40000 {
            Ok(Self::Ratio(code - 40000))
        } else if code > 11 {
            Ok(Self::Blinds(code - 11))
        } else if code < 11 {
            Ok(match code {
                0 => Self::Fold,
                1 => Self::Call,
                2 => Self::Pot,
                3 => Self::Shove,
                4 => Self::Half,
                5 => Self::Min,
                6 => Self::Bet,
                7 => Self::Quarter,
                8 => Self::Double,
                9 => Self::ThreeQuarters,
                10 => Self::Percent,
                _ => unreachable!(),
            })
        } else {
            Err(anyhow::anyhow!("unexpected action code {}", code))
        }
    }
}

/// reverse encoding, total on actions whose size fits its band
impl From<Action> for Code {
    fn from(action: Action) -> Self {
        match action {
            Action::Fold => 0,
            Action::Call => 1,
            Action::Pot => 2,
            Action::Shove => 3,
            Action::Half => 4,
            Action::Min => 5,
            Action::Bet => 6,
            Action::Quarter => 7,
            Action::Double => 8,
            Action::ThreeQuarters => 9,
            Action::Percent => 10,
            Action::Blinds(n) => 11 + n,
            Action::Ratio(p) => 40000 + p,
        }
    }
}

/// compact wire token, concatenated into the Pio file name
impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Fold => write!(f, "f"),
            Self::Call => write!(f, "c"),
            Self::Pot => write!(f, "r(100%)"),
            Self::Shove => write!(f, "r(max)"),
            Self::Half => write!(f, "r(50%)"),
            Self::Min => write!(f, "r(min)"),
            Self::Bet => write!(f, "bet"),
            Self::Quarter => write!(f, "r(25%)"),
            Self::Double => write!(f, "r(2x)"),
            Self::ThreeQuarters => write!(f, "r(75%)"),
            Self::Percent => write!(f, "%"),
            Self::Blinds(n) => write!(f, "r({}sb)", n),
            Self::Ratio(p) => write!(f, "r({}%)", p),
        }
    }
}

impl Arbitrary for Action {
    fn random() -> Self {
        use rand::Rng;
        let mut rng = rand::rng();
        match rng.random_range(0..13) {
            0 => Self::Fold,
            1 => Self::Call,
            2 => Self::Pot,
            3 => Self::Shove,
            4 => Self::Half,
            5 => Self::Min,
            6 => Self::Bet,
            7 => Self::Quarter,
            8 => Self::Double,
            9 => Self::ThreeQuarters,
            10 => Self::Percent,
            11 => Self::Blinds(rng.random_range(1..=39989)),
            _ => Self::Ratio(rng.random_range(1..=10000)),
        }
    }
}
