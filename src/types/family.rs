#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFamily {
    Safari,
    Gecko,
}

impl RuleFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Safari => "safari",
            Self::Gecko => "gecko",
        }
    }
}
