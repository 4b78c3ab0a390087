use crate::{
    Config,
    entries::{insert_front, remove_matching, replace_first_matching},
    entry::Entry,
    error::{DiaryError, Result},
    store::Store,
};
use std::sync::{Mutex, MutexGuard};

/// The central struct for all diary operations.
///
/// Every call reads the store fresh from disk; nothing is cached between
/// calls. Mutating calls hold `write_lock` across their load-modify-save so
/// two of them in the same process cannot overwrite each other's change.
#[derive(Debug)]
pub struct Diary {
    pub config: Config,
    store: Store,
    write_lock: Mutex<()>,
}

impl Diary {
    /// Creates a new `Diary` instance with a specific `Config`.
    ///
    /// This also ensures the data file exists, seeding it with an empty list.
    pub fn with_config(config: Config) -> Result<Self> {
        let store = Store::new(&config.data_file, config.atomic_writes);
        if store.ensure_exists()? {
            log::info!("created empty diary at {}", store.path().display());
        }
        Ok(Self {
            config,
            store,
            write_lock: Mutex::new(()),
        })
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    /// All entries, newest added first.
    pub fn list(&self) -> Result<Vec<Entry>> {
        self.store.load()
    }

    /// Adds a new entry on top of the list.
    ///
    /// Both fields are required; an empty one is rejected before the file is read.
    pub fn add(&self, date: &str, content: &str) -> Result<Entry> {
        if date.is_empty() || content.is_empty() {
            return Err(DiaryError::Validation("date and content are required"));
        }
        let entry = Entry::new(date, content);

        let _guard = self.lock();
        let mut entries = self.store.load()?;
        insert_front(entry.clone(), &mut entries);
        self.store.save(&entries)?;
        Ok(entry)
    }

    /// Deletes every entry matching `(date, content)`.
    ///
    /// Deleting something that isn't there still rewrites the file and succeeds.
    pub fn delete(&self, date: &str, content: &str) -> Result<usize> {
        let _guard = self.lock();
        let mut entries = self.store.load()?;
        let removed = remove_matching(date, content, &mut entries);
        self.store.save(&entries)?;
        Ok(removed)
    }

    /// Replaces the first entry matching `original` with `replacement`.
    ///
    /// Returns whether anything matched. A miss is not an error.
    pub fn edit(&self, original: &Entry, replacement: Entry) -> Result<bool> {
        let _guard = self.lock();
        let mut entries = self.store.load()?;
        let replaced = replace_first_matching(original, replacement, &mut entries);
        self.store.save(&entries)?;
        Ok(replaced)
    }

    fn lock(&self) -> MutexGuard<'_, ()> {
        // Poisoning is ignored: the mutex guards no data.
        self.write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
