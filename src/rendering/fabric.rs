use super::{Size, Yarn};

use crossterm::style::Color;
use itertools::izip;

/// A grid of styled characters the size of a region of the terminal.
#[derive(PartialEq, Debug)]
pub struct Fabric {
    size: Size,
    characters: Vec<Vec<char>>,

    colors: Vec<Vec<Option<Color>>>,
    backgrounds: Vec<Vec<Option<Color>>>,
}

impl Fabric {
    /// Return a blank fabric of the given size.
    pub fn new(size: Size) -> Self {
        let characters = vec![vec![' '; size.columns]; size.rows];
        let colors = vec![vec![None; size.columns]; size.rows];
        let backgrounds = vec![vec![None; size.columns]; size.rows];
        Fabric {
            size,
            characters,
            colors,
            backgrounds,
        }
    }

    /// Return a fabric of the given size with the string centered vertically and horizontally.
    pub fn center(string: &str, size: Size) -> Self {
        if size.rows == 0 {
            return Fabric::new(size);
        }

        let top_rows: usize = (size.rows - 1) / 2;
        let mut yarns: Vec<Yarn> = vec![Yarn::blank(size.columns); top_rows];
        yarns.push(Yarn::center(string, size.columns));

        let mut fabric = Fabric::from(yarns);
        fabric.pad_bottom(size.rows);
        fabric
    }

    /// Return the size of the fabric.
    pub fn size(&self) -> Size {
        self.size
    }

    pub fn characters(&self) -> &Vec<Vec<char>> {
        &self.characters
    }

    pub fn colors(&self) -> &Vec<Vec<Option<Color>>> {
        &self.colors
    }

    pub fn backgrounds(&self) -> &Vec<Vec<Option<Color>>> {
        &self.backgrounds
    }

    /// Add blank rows to the bottom of the fabric until it has `new_rows` rows.
    ///
    /// If the fabric already has at least `new_rows` rows then this has no effect.
    pub fn pad_bottom(&mut self, new_rows: usize) {
        if new_rows <= self.size.rows {
            return;
        }
        let difference = new_rows - self.size.rows;

        // NOTE: Like a yarn, a row is allowed to have fewer styles than characters.
        self.characters
            .extend(vec![vec![' '; self.size.columns]; difference]);
        self.colors.extend(vec![Vec::new(); difference]);
        self.backgrounds.extend(vec![Vec::new(); difference]);

        self.size.rows = new_rows;
    }

    /// Return this fabric with the `other` fabric stitched on below it.
    pub fn quilt_bottom(mut self, other: Fabric) -> Fabric {
        for (row, row_colors, row_backgrounds) in
            izip!(other.characters, other.colors, other.backgrounds)
        {
            self.characters.push(row);
            self.colors.push(row_colors);
            self.backgrounds.push(row_backgrounds);
        }

        self.size.rows += other.size.rows;
        self.size.columns = self.size.columns.max(other.size.columns);

        self
    }
}

impl From<Vec<Yarn>> for Fabric {
    fn from(rows: Vec<Yarn>) -> Self {
        let row_count: usize = rows.len();
        let column_count: usize = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let size: Size = Size::new(row_count, column_count);

        let characters: Vec<Vec<char>> = rows.iter().map(|row| row.characters().clone()).collect();
        let colors: Vec<Vec<Option<Color>>> = rows.iter().map(|row| row.colors().clone()).collect();
        let backgrounds: Vec<Vec<Option<Color>>> =
            rows.iter().map(|row| row.backgrounds().clone()).collect();

        Fabric {
            size,
            characters,
            colors,
            backgrounds,
        }
    }
}

impl From<Yarn> for Fabric {
    fn from(row: Yarn) -> Self {
        let size = Size::new(1, row.len());

        let characters = vec![row.characters().to_vec()];
        let colors = vec![row.colors().to_vec()];
        let backgrounds = vec![row.backgrounds().to_vec()];

        Fabric {
            size,
            characters,
            colors,
            backgrounds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    #[test_case(
        Fabric::new(Size::new(2, 3)),
        Fabric::new(Size::new(1, 3)),
        Fabric::new(Size::new(3, 3));
        "two blank fabrics"
    )]
    #[test_case(
        Fabric::new(Size::new(0, 3)),
        Fabric::new(Size::new(2, 3)),
        Fabric::new(Size::new(2, 3));
        "an empty fabric on top"
    )]
    fn test_quilt_bottom(fabric: Fabric, other: Fabric, expected: Fabric) {
        let result = fabric.quilt_bottom(other);

        assert_eq!(result, expected);
    }

    #[test]
    fn test_pad_bottom() {
        let mut fabric = Fabric::from(Yarn::from("ab"));

        fabric.pad_bottom(3);

        assert_eq!(fabric, Fabric::from(vec![Yarn::from("ab"), Yarn::blank(2), Yarn::blank(2)]));
    }

    #[test]
    fn test_pad_bottom_never_shrinks() {
        let mut fabric = Fabric::new(Size::new(3, 2));

        fabric.pad_bottom(1);

        assert_eq!(fabric.size(), Size::new(3, 2));
    }

    #[test_case("hi", Size::new(3, 4), vec!["    ", " hi ", "    "]; "an odd number of rows")]
    #[test_case("hi", Size::new(4, 2), vec!["  ", "hi", "  ", "  "]; "ties break upwards")]
    #[test_case("hi", Size::new(1, 2), vec!["hi"]; "a single row")]
    fn test_center(string: &str, size: Size, expected_rows: Vec<&str>) {
        let fabric = Fabric::center(string, size);

        let expected = Fabric::from(expected_rows.into_iter().map(Yarn::from).collect::<Vec<Yarn>>());
        assert_eq!(fabric, expected);
    }
}
