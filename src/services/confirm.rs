/// Answer to a confirmation prompt for a destructive action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    Accepted,
    Declined,
}

impl Confirmation {
    /// Interpret a submitted `confirm` form field. Only `yes` accepts.
    pub fn from_field(value: Option<&str>) -> Self {
        match value {
            Some(v) if v.eq_ignore_ascii_case("yes") => Confirmation::Accepted,
            _ => Confirmation::Declined,
        }
    }

    pub fn is_accepted(self) -> bool {
        self == Confirmation::Accepted
    }
}

/// Decides whether a destructive action may proceed.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> Confirmation;
}

/// A pre-made answer, e.g. one the user already gave on a confirmation page.
impl Confirm for Confirmation {
    fn confirm(&mut self, _prompt: &str) -> Confirmation {
        *self
    }
}

impl<F> Confirm for F
where
    F: FnMut(&str) -> bool,
{
    fn confirm(&mut self, prompt: &str) -> Confirmation {
        if self(prompt) {
            Confirmation::Accepted
        } else {
            Confirmation::Declined
        }
    }
}
