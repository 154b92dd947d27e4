use super::NormalizeStep;

/// Layer 2: leet-speak de-obfuscation.
///
/// A fixed, single-pass char table. Substituted chars are never fed back
/// through the table.
pub struct LeetSubstitution {
    table: Vec<(char, char)>,
}

impl LeetSubstitution {
    pub fn new(table: Vec<(char, char)>) -> Self {
        Self { table }
    }

    /// Default digit/symbol stand-ins.
    pub fn default_table() -> Vec<(char, char)> {
        vec![
            ('0', 'o'),
            ('1', 'i'),
            ('3', 'e'),
            ('4', 'a'),
            ('5', 's'),
            ('7', 't'),
            ('8', 'b'),
            ('@', 'a'),
            ('$', 's'),
            ('!', 'i'),
            ('|', 'i'),
        ]
    }

    fn substitute(&self, ch: char) -> char {
        self.table
            .iter()
            .find(|(from, _)| *from == ch)
            .map(|(_, to)| *to)
            .unwrap_or(ch)
    }
}

impl NormalizeStep for LeetSubstitution {
    fn apply(&self, input: &str) -> String {
        input.chars().map(|c| self.substitute(c)).collect()
    }

    fn name(&self) -> &str {
        "leet"
    }
}
