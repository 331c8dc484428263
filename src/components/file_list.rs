use crate::color::Color;
use crate::component::Component;
use crate::rendering::{Fabric, Size, Yarn};
use crate::stateful::Stateful;

use std::cmp;
use std::fmt::{Display, Error as FmtError, Formatter};
use std::fs;
use std::io::Error as IOError;
use std::path::PathBuf;

use typed_builder::TypedBuilder;

#[derive(TypedBuilder)]
pub struct Props {
    files: Vec<PathBuf>,
    /// The size of the list region.
    size: Size,
}

/// The scrollable list of files with a cursor on one of them.
pub struct FileList {
    state: State,
}

impl Component<Props, Event, Effect> for FileList {
    fn new(props: Props) -> Self {
        let state = State::from(props);
        Self { state }
    }

    fn handle(&mut self, event: Event) -> Option<Effect> {
        let action: Action = self.map(event);
        self.state.perform(action)
    }

    fn render(&self, size: Size) -> Fabric {
        if self.state.files.is_empty() {
            return Fabric::center("No files left.", size);
        }

        let mut yarns: Vec<Yarn> = Vec::new();
        for (index, file) in self.state.visible_files(size.rows) {
            let mut yarn = Yarn::elide_start(&file.display().to_string(), size.columns);
            if index == self.state.cursor {
                yarn.color(Color::InvertedText.into());
                yarn.background(Color::Highlight.into());
            } else {
                yarn.color(Color::File.into());
            }
            yarns.push(yarn);
        }

        let mut fabric = Fabric::from(yarns);
        fabric.pad_bottom(size.rows);
        fabric
    }
}

impl FileList {
    /// Return the files that are still listed, in the order they were found.
    pub fn files(&self) -> &[PathBuf] {
        &self.state.files
    }

    /// Return the index of the file under the cursor.
    ///
    /// This is always a valid index unless the list is empty.
    pub fn cursor(&self) -> usize {
        self.state.cursor
    }

    /// Return the index of the first visible file.
    #[cfg(test)]
    pub fn offset(&self) -> usize {
        self.state.offset
    }

    fn map(&self, event: Event) -> Action {
        match event {
            Event::Next => Action::Next,
            Event::Previous => Action::Previous,
            Event::DeleteSelected => Action::DeleteSelected,
            Event::Resize { size } => Action::Resize { size },
        }
    }
}

pub enum Event {
    /// Move the cursor to the next file.
    Next,
    /// Move the cursor to the previous file.
    Previous,
    /// Delete the file under the cursor and stop listing it.
    DeleteSelected,
    /// The list region changed size.
    Resize { size: Size },
}

struct State {
    files: Vec<PathBuf>,
    cursor: usize,
    /// The index of the first visible file.
    offset: usize,
    /// The number of visible rows.
    rows: usize,
}

impl From<Props> for State {
    fn from(props: Props) -> Self {
        State {
            files: props.files,
            cursor: 0,
            offset: 0,
            rows: props.size.rows,
        }
    }
}

impl State {
    /// Return the files that fit in `rows` rows starting at the offset, with their indices.
    fn visible_files(&self, rows: usize) -> impl Iterator<Item = (usize, &PathBuf)> {
        let start = cmp::min(self.offset, self.files.len());
        let end = cmp::min(start + rows, self.files.len());
        (start..end).zip(self.files[start..end].iter())
    }

    /// Adjust the offset so that the cursor is visible and no rows are wasted below the last file.
    fn scroll_to_cursor(&mut self) {
        let bottom_pinned_offset = self.files.len().saturating_sub(self.rows);
        if self.offset > bottom_pinned_offset {
            self.offset = bottom_pinned_offset;
        }

        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.rows > 0 && self.cursor >= self.offset + self.rows {
            self.offset = self.cursor + 1 - self.rows;
        }
    }

    fn next(&mut self) -> Option<Effect> {
        if self.cursor + 1 >= self.files.len() {
            return Some(Effect::EndReached);
        }

        self.cursor += 1;
        self.scroll_to_cursor();
        None
    }

    fn previous(&mut self) -> Option<Effect> {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.scroll_to_cursor();
        }
        None
    }

    /// Remove the file under the cursor from the file system and from the list.
    ///
    /// The file is no longer listed even if removing it failed.
    fn delete_selected(&mut self) -> Option<Effect> {
        if self.files.is_empty() {
            return None;
        }

        let result = fs::remove_file(&self.files[self.cursor]);
        let file: PathBuf = self.files.remove(self.cursor);

        if self.cursor >= self.files.len() {
            self.cursor = self.files.len().saturating_sub(1);
        }
        self.scroll_to_cursor();

        match result {
            Ok(()) => Some(Effect::Deleted { file }),
            Err(error) => Some(Effect::DeleteFailed(DeletionFailure { file, error })),
        }
    }

    fn resize(&mut self, size: Size) -> Option<Effect> {
        self.rows = size.rows;
        self.scroll_to_cursor();
        None
    }
}

impl Stateful<Action, Effect> for State {
    fn perform(&mut self, action: Action) -> Option<Effect> {
        match action {
            Action::Next => self.next(),
            Action::Previous => self.previous(),
            Action::DeleteSelected => self.delete_selected(),
            Action::Resize { size } => self.resize(size),
        }
    }
}

enum Action {
    Next,
    Previous,
    DeleteSelected,
    Resize { size: Size },
}

#[derive(Debug)]
pub enum Effect {
    /// There is no file after the cursor.
    EndReached,
    /// The file was removed from the file system and the list.
    Deleted { file: PathBuf },
    /// The file was removed from the list but not from the file system.
    DeleteFailed(DeletionFailure),
}

/// A file that could not be removed from the file system.
#[derive(Debug)]
pub struct DeletionFailure {
    file: PathBuf,
    error: IOError,
}

impl DeletionFailure {
    /// Return the file that could not be removed.
    #[cfg(test)]
    pub fn file(&self) -> &std::path::Path {
        &self.file
    }
}

impl Display for DeletionFailure {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(
            formatter,
            "Failed to delete file \"{}\": {}",
            self.file.display(),
            self.error
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;
    use test_case::test_case;

    /// Create `count` files in a temporary directory and return their paths.
    fn create_files(dir: &TempDir, count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|index| {
                let path = dir.path().join(format!("file-{}", index));
                fs::write(&path, "contents").unwrap();
                path
            })
            .collect()
    }

    /// Return paths in a temporary directory that do not exist.
    fn missing_files(dir: &TempDir, count: usize) -> Vec<PathBuf> {
        (0..count)
            .map(|index| dir.path().join(format!("missing-{}", index)))
            .collect()
    }

    fn file_list(files: Vec<PathBuf>, rows: usize) -> FileList {
        FileList::new(
            Props::builder()
                .files(files)
                .size(Size::new(rows, 40))
                .build(),
        )
    }

    #[test]
    fn test_next_moves_the_cursor_forward() {
        let dir = TempDir::new().unwrap();
        let mut list = file_list(create_files(&dir, 3), 10);

        let effect = list.handle(Event::Next);

        assert!(effect.is_none());
        assert_eq!(list.cursor(), 1);
    }

    #[test_case(1; "a single file")]
    #[test_case(3; "several files")]
    fn test_next_on_the_last_file_reaches_the_end(count: usize) {
        let dir = TempDir::new().unwrap();
        let mut list = file_list(create_files(&dir, count), 10);
        for _ in 1..count {
            list.handle(Event::Next);
        }

        let effect = list.handle(Event::Next);

        assert!(matches!(effect, Some(Effect::EndReached)));
        assert_eq!(list.cursor(), count - 1);
    }

    #[test]
    fn test_previous_on_the_first_file_does_nothing() {
        let dir = TempDir::new().unwrap();
        let files = create_files(&dir, 3);
        let mut list = file_list(files.clone(), 10);

        let effect = list.handle(Event::Previous);

        assert!(effect.is_none());
        assert_eq!(list.cursor(), 0);
        assert_eq!(list.files(), files.as_slice());
    }

    #[test]
    fn test_delete_removes_the_file_and_keeps_the_order() {
        let dir = TempDir::new().unwrap();
        let files = create_files(&dir, 4);
        let mut list = file_list(files.clone(), 10);
        list.handle(Event::Next);

        let effect = list.handle(Event::DeleteSelected);

        match effect {
            Some(Effect::Deleted { file }) => assert_eq!(file, files[1]),
            other => panic!("Unexpected effect: {:?}", other),
        }
        assert!(!files[1].exists());
        assert_eq!(
            list.files(),
            &[files[0].clone(), files[2].clone(), files[3].clone()]
        );
        assert_eq!(list.cursor(), 1);
    }

    #[test]
    fn test_delete_failure_still_stops_listing_the_file() {
        let dir = TempDir::new().unwrap();
        let files = missing_files(&dir, 2);
        let mut list = file_list(files.clone(), 10);

        let effect = list.handle(Event::DeleteSelected);

        match effect {
            Some(Effect::DeleteFailed(failure)) => {
                assert_eq!(failure.file(), files[0].as_path());
                assert!(failure.to_string().starts_with("Failed to delete file"));
            }
            other => panic!("Unexpected effect: {:?}", other),
        }
        assert_eq!(list.files(), &[files[1].clone()]);
    }

    #[test]
    fn test_delete_of_the_last_file_moves_the_cursor_back() {
        let dir = TempDir::new().unwrap();
        let files = create_files(&dir, 3);
        let mut list = file_list(files.clone(), 10);
        list.handle(Event::Next);
        list.handle(Event::Next);

        list.handle(Event::DeleteSelected);

        assert_eq!(list.cursor(), 1);
        assert_eq!(list.files(), &[files[0].clone(), files[1].clone()]);
    }

    #[test]
    fn test_delete_of_the_only_file_empties_the_list() {
        let dir = TempDir::new().unwrap();
        let mut list = file_list(create_files(&dir, 1), 10);

        list.handle(Event::DeleteSelected);

        assert!(list.files().is_empty());
        assert_eq!(list.cursor(), 0);
        assert!(list.handle(Event::DeleteSelected).is_none());
        assert!(list.handle(Event::Previous).is_none());
        assert!(matches!(list.handle(Event::Next), Some(Effect::EndReached)));
    }

    #[test]
    fn test_next_scrolls_when_the_cursor_leaves_the_view() {
        let dir = TempDir::new().unwrap();
        let mut list = file_list(missing_files(&dir, 5), 2);

        list.handle(Event::Next);
        assert_eq!(list.offset(), 0);
        list.handle(Event::Next);
        assert_eq!(list.offset(), 1);
        list.handle(Event::Next);
        assert_eq!(list.offset(), 2);

        list.handle(Event::Previous);
        assert_eq!(list.offset(), 2);
        list.handle(Event::Previous);
        assert_eq!(list.offset(), 1);
    }

    #[test]
    fn test_delete_near_the_bottom_pins_the_view() {
        let dir = TempDir::new().unwrap();
        let mut list = file_list(missing_files(&dir, 4), 2);
        list.handle(Event::Next);
        list.handle(Event::Next);
        list.handle(Event::Next);
        assert_eq!(list.offset(), 2);

        list.handle(Event::DeleteSelected);

        assert_eq!(list.cursor(), 2);
        assert_eq!(list.offset(), 1);
    }

    #[test]
    fn test_resize_keeps_the_cursor_visible() {
        let dir = TempDir::new().unwrap();
        let mut list = file_list(missing_files(&dir, 10), 10);
        for _ in 0..6 {
            list.handle(Event::Next);
        }
        assert_eq!(list.offset(), 0);

        list.handle(Event::Resize {
            size: Size::new(3, 40),
        });

        assert_eq!(list.offset(), 4);
        assert_eq!(list.cursor(), 6);
    }

    /// Every sequence of events keeps the cursor on a listed file while there are files.
    #[test]
    fn test_cursor_stays_in_bounds() {
        let dir = TempDir::new().unwrap();
        let files = missing_files(&dir, 4);

        for sequence in 0..3usize.pow(6) {
            let mut list = file_list(files.clone(), 2);
            let mut remaining = sequence;
            for _ in 0..6 {
                let event = match remaining % 3 {
                    0 => Event::Next,
                    1 => Event::Previous,
                    _ => Event::DeleteSelected,
                };
                remaining /= 3;

                let len_before = list.files().len();
                let is_delete = matches!(event, Event::DeleteSelected);
                list.handle(event);

                if is_delete && len_before > 0 {
                    assert_eq!(list.files().len(), len_before - 1);
                }
                if !list.files().is_empty() {
                    assert!(list.cursor() < list.files().len());
                    assert!(list.offset() <= list.cursor());
                    assert!(list.cursor() < list.offset() + 2);
                }
            }
        }
    }

    #[test]
    fn test_render_highlights_the_cursor() {
        let list = file_list(
            vec![PathBuf::from("/d/a"), PathBuf::from("/d/b")],
            3,
        );

        let fabric = list.render(Size::new(3, 6));

        let mut first = Yarn::from("/d/a  ");
        first.color(Color::InvertedText.into());
        first.background(Color::Highlight.into());
        let mut second = Yarn::from("/d/b  ");
        second.color(Color::File.into());
        let mut expected = Fabric::from(vec![first, second]);
        expected.pad_bottom(3);
        assert_eq!(fabric, expected);
    }

    #[test]
    fn test_render_of_an_empty_list() {
        let dir = TempDir::new().unwrap();
        let mut list = file_list(missing_files(&dir, 1), 3);
        list.handle(Event::DeleteSelected);

        let fabric = list.render(Size::new(3, 14));

        assert_eq!(fabric, Fabric::center("No files left.", Size::new(3, 14)));
    }
}
