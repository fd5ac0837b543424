//! Named console commands

/// A registered command
#[derive(Debug, Clone, Copy)]
pub struct CommandEntry<H> {
    pub name: &'static str,
    /// Argument synopsis, empty when the command takes none
    pub usage: &'static str,
    pub description: &'static str,
    pub handler: H,
}

impl<H> CommandEntry<H> {
    /// `name` followed by its argument synopsis
    pub fn synopsis(&self) -> String {
        if self.usage.is_empty() {
            self.name.to_string()
        } else {
            format!("{} {}", self.name, self.usage)
        }
    }
}

/// Commands of one view, kept in registration order
#[derive(Debug, Clone)]
pub struct CommandRegistry<H> {
    entries: Vec<CommandEntry<H>>,
}

impl<H> Default for CommandRegistry<H> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<H> CommandRegistry<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command; a later registration under the same name replaces it
    pub fn register(
        &mut self,
        name: &'static str,
        usage: &'static str,
        description: &'static str,
        handler: H,
    ) -> &mut Self {
        let entry = CommandEntry {
            name,
            usage,
            description,
            handler,
        };
        match self.entries.iter_mut().find(|e| e.name == name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
        self
    }

    pub fn find(&self, name: &str) -> Option<&CommandEntry<H>> {
        self.entries.iter().find(|e| e.name == name)
    }

    pub fn entries(&self) -> &[CommandEntry<H>] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_find() {
        let mut registry = CommandRegistry::new();
        registry
            .register("show", "<index>", "Show one element.", 1)
            .register("list", "", "List elements.", 2)
            .register("show", "<index>", "Show one element in detail.", 3);

        let names: Vec<_> = registry.entries().iter().map(|e| e.name).collect();
        assert_eq!(names, vec!["show", "list"]);
        assert_eq!(registry.find("show").map(|e| e.handler), Some(3));
        assert_eq!(registry.find("show").unwrap().synopsis(), "show <index>");
        assert_eq!(registry.find("list").unwrap().synopsis(), "list");
        assert!(registry.find("nope").is_none());
    }
}
