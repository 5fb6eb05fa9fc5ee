use rec_filter::core::{ChangeWatcher, FilterSnapshot, ItemId, NullView, View};
use rec_filter::source::MemorySource;

/// Shared test utilities to reduce duplication across test files
pub mod test_helpers {
    use super::*;

    /// Initialized watcher over items `c-0`, `c-1`, ... with the given counts
    pub fn watcher_with_counts(counts: &[u32]) -> ChangeWatcher<MemorySource> {
        let mut watcher = ChangeWatcher::new(MemorySource::from_counts(counts.iter().copied()));
        watcher
            .initialize(&mut NullView)
            .expect("memory source never fails");
        watcher
    }

    /// Counts of visible items, in source order
    pub fn visible_counts(watcher: &ChangeWatcher<MemorySource>) -> Vec<u32> {
        watcher
            .items()
            .iter()
            .filter(|item| item.is_visible())
            .map(|item| item.recommended_count)
            .collect()
    }

    pub fn id(value: &str) -> ItemId {
        ItemId::from(value)
    }

    /// Keeps every frame it is asked to draw
    #[derive(Default)]
    pub struct RecordingView {
        pub frames: Vec<FilterSnapshot>,
    }

    impl View for RecordingView {
        fn redraw(&mut self, snapshot: &FilterSnapshot) {
            self.frames.push(snapshot.clone());
        }
    }
}
