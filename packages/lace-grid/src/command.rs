//! Named grid operations

use lace_traits::ItemId;

use crate::error::{UsageError, UsageResult};

/// An operation a host can ask an initialized grid to perform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Append(Vec<ItemId>),
    Remove(Vec<ItemId>),
    RemoveAll,
    Relayout,
    Balance,
}

impl Command {
    /// Resolve an operation by name. Operations without arguments ignore `items`.
    ///
    /// `init` is not a command: grids are created through `GridRegistry::init`.
    pub fn from_name(name: &str, items: Vec<ItemId>) -> UsageResult<Self> {
        match name {
            "append" => Ok(Self::Append(items)),
            "remove" => Ok(Self::Remove(items)),
            "removeAll" | "remove_all" => Ok(Self::RemoveAll),
            "relayout" => Ok(Self::Relayout),
            "balance" | "evenBottom" => Ok(Self::Balance),
            _ => Err(UsageError::unknown_command(name)),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Append(_) => "append",
            Self::Remove(_) => "remove",
            Self::RemoveAll => "removeAll",
            Self::Relayout => "relayout",
            Self::Balance => "balance",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve() {
        let items = vec![ItemId(1)];
        assert_eq!(
            Command::from_name("append", items.clone()),
            Ok(Command::Append(items.clone()))
        );
        assert_eq!(
            Command::from_name("remove", items.clone()),
            Ok(Command::Remove(items.clone()))
        );
        assert_eq!(Command::from_name("removeAll", items), Ok(Command::RemoveAll));
        assert_eq!(Command::from_name("evenBottom", Vec::new()), Ok(Command::Balance));
    }

    #[test]
    fn unknown_names_are_rejected() {
        assert_eq!(
            Command::from_name("explode", Vec::new()),
            Err(UsageError::unknown_command("explode"))
        );
        assert!(Command::from_name("init", Vec::new()).is_err());
        assert!(Command::from_name("Append", Vec::new()).is_err());
    }

    #[test]
    fn name_round_trips_through_from_name() {
        for command in [Command::RemoveAll, Command::Relayout, Command::Balance] {
            assert_eq!(Command::from_name(command.name(), Vec::new()), Ok(command));
        }
    }
}
