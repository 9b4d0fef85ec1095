use std::fmt::Formatter;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct A1Notation(pub String);

impl std::fmt::Display for A1Notation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<A1Notation> for String {
    fn from(a1_notation: A1Notation) -> Self {
        a1_notation.0
    }
}

impl AsRef<str> for A1Notation {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl A1Notation {
    /// Range covering a whole worksheet, i.e. just its quoted title. Single
    /// quotes inside the title are doubled.
    ///
    /// # Examples
    /// ```
    /// use deploy_recorder::domain::a1_notation::A1Notation;
    /// assert_eq!(A1Notation::whole_sheet("Deploys").as_ref(), "'Deploys'");
    /// assert_eq!(A1Notation::whole_sheet("Bob's").as_ref(), "'Bob''s'");
    /// ```
    pub fn whole_sheet(sheet_title: &str) -> Self {
        A1Notation(quote_sheet_title(sheet_title))
    }
}

pub trait ToA1Notation {
    fn to_a1_notation(&self) -> A1Notation;
}

fn quote_sheet_title(sheet_title: &str) -> String {
    format!("'{}'", sheet_title.replace('\'', "''"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_sheet_with_spaces() {
        assert_eq!(
            A1Notation::whole_sheet("Deploys 2024").to_string(),
            "'Deploys 2024'"
        );
    }

    #[test]
    fn test_into_string() {
        let notation: String = A1Notation::whole_sheet("Deploys").into();
        assert_eq!(notation, "'Deploys'");
    }
}
