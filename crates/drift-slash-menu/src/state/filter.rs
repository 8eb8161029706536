//! Command filtering and grouping.

use crate::model::{Category, Command};
use strum::IntoEnumIterator;

/// Filter commands based on a search query
///
/// An empty query keeps every command. Otherwise a command is kept if the
/// query is a case-insensitive substring of its title, its description, or
/// one of its keywords. Declaration order is preserved.
pub fn filter_commands<'a>(commands: &'a [Command], query: &str) -> Vec<&'a Command> {
    if query.is_empty() {
        return commands.iter().collect();
    }

    let query_lower = query.to_lowercase();
    commands
        .iter()
        .filter(|command| command.matches(&query_lower))
        .collect()
}

/// Commands of one category, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandGroup<'a> {
    pub category: Category,
    pub commands: Vec<&'a Command>,
}

/// Partition commands into category groups.
///
/// Groups follow the declaration order of [`Category`], not the order in
/// which categories are first seen; empty groups are omitted.
pub fn group_by_category<'a>(commands: &[&'a Command]) -> Vec<CommandGroup<'a>> {
    Category::iter()
        .filter_map(|category| {
            let members: Vec<&'a Command> = commands
                .iter()
                .copied()
                .filter(|command| command.category == category)
                .collect();
            (!members.is_empty()).then_some(CommandGroup {
                category,
                commands: members,
            })
        })
        .collect()
}

/// The result of filtering the command set with one query.
///
/// Keeps both the declaration-ordered matches and the grouped view. Index
/// based navigation uses the *flattened* order, i.e. the groups laid out
/// one after another, which is also the order rows appear on screen.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredCommands<'a> {
    matches: Vec<&'a Command>,
    groups: Vec<CommandGroup<'a>>,
}

impl<'a> FilteredCommands<'a> {
    pub fn new(commands: &'a [Command], query: &str) -> Self {
        let matches = filter_commands(commands, query);
        let groups = group_by_category(&matches);
        Self { matches, groups }
    }

    /// Matching commands in declaration order
    pub fn matches(&self) -> &[&'a Command] {
        &self.matches
    }

    /// Non-empty category groups in category order
    pub fn groups(&self) -> &[CommandGroup<'a>] {
        &self.groups
    }

    /// Matching commands in on-screen order
    pub fn flattened(&self) -> impl Iterator<Item = &'a Command> + '_ {
        self.groups
            .iter()
            .flat_map(|group| group.commands.iter().copied())
    }

    /// Command at `index` in the flattened order
    pub fn get(&self, index: usize) -> Option<&'a Command> {
        self.flattened().nth(index)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
