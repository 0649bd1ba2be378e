// src/roster.rs
//
// In-memory character records and the role-partitioned roster.
//
// - Character: one flat record, exactly the columns we persist.
// - Roster:    ordered list of characters (feed order) plus two index
//              views by role. Both views are kept in step by `push`,
//              which is the only way characters get in.

use serde::Serialize;

/// One character, normalized from the feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: String,
    pub name: String,
    pub slug: String,
    /// Raw source value, stored verbatim. See `Role::of`.
    pub role: String,
    pub difficulty: String,
    pub inclusion: String,
    pub description: String,
    pub release_date: String,
    /// Base64 of the headshot image.
    #[serde(skip_serializing)]
    pub image_data: String,
}

impl Character {
    pub fn role(&self) -> Role { Role::of(&self.role) }
    pub fn is_killer(&self) -> bool { self.role() == Role::Killer }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    Killer,
    Survivor,
}

impl Role {
    /// Exactly `"killer"` is a killer; anything else lands with the survivors.
    pub fn of(raw: &str) -> Self {
        if raw == "killer" { Role::Killer } else { Role::Survivor }
    }
}

#[derive(Clone, Debug, Default)]
pub struct Roster {
    characters: Vec<Character>,
    killers: Vec<usize>,
    survivors: Vec<usize>,
}

impl Roster {
    pub fn new() -> Self { Self::default() }

    /// Build from an existing list. Goes through `push` so the views match.
    pub fn from_characters(list: impl IntoIterator<Item = Character>) -> Self {
        let mut roster = Self::new();
        for c in list {
            roster.push(c);
        }
        roster
    }

    pub fn push(&mut self, character: Character) {
        let ix = self.characters.len();
        match character.role() {
            Role::Killer   => self.killers.push(ix),
            Role::Survivor => self.survivors.push(ix),
        }
        self.characters.push(character);
    }

    pub fn len(&self) -> usize { self.characters.len() }
    pub fn is_empty(&self) -> bool { self.characters.is_empty() }

    /// All characters in feed order.
    pub fn characters(&self) -> &[Character] { &self.characters }

    pub fn killers(&self) -> impl Iterator<Item = &Character> + '_ {
        self.killers.iter().map(|&ix| &self.characters[ix])
    }

    pub fn survivors(&self) -> impl Iterator<Item = &Character> + '_ {
        self.survivors.iter().map(|&ix| &self.characters[ix])
    }

    pub fn by_role(&self, role: Role) -> Vec<&Character> {
        match role {
            Role::Killer   => self.killers().collect(),
            Role::Survivor => self.survivors().collect(),
        }
    }

    pub fn killer_count(&self) -> usize { self.killers.len() }
    pub fn survivor_count(&self) -> usize { self.survivors.len() }

    /// First character with this id, if any.
    pub fn get(&self, id: &str) -> Option<&Character> {
        self.characters.iter().find(|c| c.id == id)
    }

    pub fn into_characters(self) -> Vec<Character> { self.characters }
}
