/*!
This module contains the [`Yarn`] struct which is used for representing styled text.
*/
use crossterm::style::Color as CrosstermColor;
use std::cmp::Ordering;

/// A yarn is a single row of characters with text colors and background colors.
#[derive(Default, Debug, PartialEq, Eq, Clone)]
pub struct Yarn {
    /// The characters.
    characters: Vec<char>,
    // NOTE: The style vectors are allowed to be shorter than the number of characters.
    /// The colors of the text.
    colors: Vec<Option<CrosstermColor>>,
    /// The background colors of the text.
    backgrounds: Vec<Option<CrosstermColor>>,
}

impl Yarn {
    /// Return a new yarn of zero length.
    #[cfg(test)]
    pub fn new() -> Self {
        Self {
            ..Default::default()
        }
    }

    /// Return a yarn consisting of unstylized spaces of the given length.
    pub fn blank(len: usize) -> Self {
        let characters = vec![' '; len];
        Self {
            characters,
            ..Default::default()
        }
    }

    /// Return a yarn with string centered and truncated with dots if the string is longer than the
    /// the length.
    pub fn center(string: &str, len: usize) -> Self {
        if len == 0 {
            return Yarn::default();
        }

        let string_len: usize = string.chars().count();
        match string_len.cmp(&len) {
            Ordering::Greater => {
                if len <= 3 {
                    return Yarn::from(vec!['.'; len]);
                }
                let mut characters: Vec<char> = Vec::with_capacity(len);
                characters.extend(string.chars().take(len - 3));
                characters.append(&mut vec!['.'; 3]);
                Yarn::from(characters)
            }
            Ordering::Less => {
                let mut characters: Vec<char> = Vec::with_capacity(len);

                let before_len: usize = (len - string_len) / 2;
                characters.append(&mut vec![' '; before_len]);

                characters.extend(string.chars());

                let after_len: usize = len - string_len - before_len;
                characters.append(&mut vec![' '; after_len]);

                Yarn::from(characters)
            }
            Ordering::Equal => Yarn::from(string),
        }
    }

    /// Return a yarn of the string left aligned in the length.
    ///
    /// If the string is too long then the start is replaced with dots so that the end (for a path,
    /// the file name) stays visible.
    pub fn elide_start(string: &str, len: usize) -> Self {
        let string_len: usize = string.chars().count();
        if string_len <= len {
            let mut yarn = Yarn::from(string);
            yarn.resize(len);
            return yarn;
        }

        if len <= 3 {
            return Yarn::from(vec!['.'; len]);
        }
        let mut characters: Vec<char> = Vec::with_capacity(len);
        characters.append(&mut vec!['.'; 3]);
        characters.extend(string.chars().skip(string_len - (len - 3)));
        Yarn::from(characters)
    }

    /// Return the length of the yarn.
    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// Add the other yarn to the end of this one and return the new yarn.
    pub fn concat(mut self, other: Self) -> Self {
        let len_before: usize = self.len();
        self.characters.extend(other.characters);

        if !other.colors.is_empty() {
            self.colors.resize(len_before, None);
            self.colors.extend(other.colors);
        }

        if !other.backgrounds.is_empty() {
            self.backgrounds.resize(len_before, None);
            self.backgrounds.extend(other.backgrounds);
        }

        self
    }

    /// Change the length of the yarn to the `new_len`.
    pub fn resize(&mut self, new_len: usize) {
        let len = self.len();
        match len.cmp(&new_len) {
            Ordering::Greater => {
                self.truncate(new_len);
            }
            Ordering::Less => {
                self.characters.extend(vec![' '; new_len - len]);
            }
            Ordering::Equal => {}
        }
    }

    /// Shortens the yarn to the given length.
    ///
    /// If the yarn is already shorter than the `new_len` then this has no effect.
    pub fn truncate(&mut self, new_len: usize) {
        self.characters.truncate(new_len);
        self.colors.truncate(new_len);
        self.backgrounds.truncate(new_len);
    }

    /// Set the text color of the entire yarn to the `color`.
    pub fn color(&mut self, color: CrosstermColor) {
        self.colors = vec![Some(color); self.len()];
    }

    /// Set the background color of the entire yarn to the `color`.
    pub fn background(&mut self, color: CrosstermColor) {
        self.backgrounds = vec![Some(color); self.len()];
    }

    /// Return the characters of the yarn.
    pub fn characters(&self) -> &Vec<char> {
        &self.characters
    }

    /// Return the text colors of the yarn.
    pub fn colors(&self) -> &Vec<Option<CrosstermColor>> {
        &self.colors
    }

    /// Return the background colors of the yarn.
    pub fn backgrounds(&self) -> &Vec<Option<CrosstermColor>> {
        &self.backgrounds
    }
}

impl From<String> for Yarn {
    fn from(string: String) -> Self {
        let characters: Vec<char> = string.chars().collect();
        Yarn {
            characters,
            ..Default::default()
        }
    }
}

impl From<&str> for Yarn {
    fn from(string: &str) -> Self {
        let characters: Vec<char> = string.chars().collect();
        Yarn {
            characters,
            ..Default::default()
        }
    }
}

impl From<Vec<char>> for Yarn {
    fn from(characters: Vec<char>) -> Self {
        Yarn {
            characters,
            ..Default::default()
        }
    }
}
