#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use voicenote_core::{
    DictationError, KeyValueStore, ListenOptions, MemoryKeyValueStore, SpeechCapability,
    StoreError, StoreResult,
};

/// Speech engine fake that records the calls it receives.
#[derive(Debug, Clone, Default)]
pub struct FakeSpeech {
    pub supported: bool,
    pub calls: Rc<RefCell<Vec<String>>>,
    heard: Rc<RefCell<String>>,
}

impl FakeSpeech {
    pub fn supported() -> Self {
        Self {
            supported: true,
            ..Self::default()
        }
    }

    pub fn unsupported() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    /// Appends recognized words and returns the cumulative transcript, the way
    /// a continuous engine reports it.
    pub fn hear(&self, words: &str) -> String {
        let mut heard = self.heard.borrow_mut();
        if !heard.is_empty() {
            heard.push(' ');
        }
        heard.push_str(words);
        heard.clone()
    }
}

impl SpeechCapability for FakeSpeech {
    fn is_supported(&self) -> bool {
        self.supported
    }

    fn start_listening(&mut self, options: ListenOptions) -> Result<(), DictationError> {
        self.calls
            .borrow_mut()
            .push(format!("start continuous={}", options.continuous));
        Ok(())
    }

    fn stop_listening(&mut self) -> Result<(), DictationError> {
        self.calls.borrow_mut().push("stop".to_string());
        Ok(())
    }

    fn reset_transcript(&mut self) {
        self.calls.borrow_mut().push("reset".to_string());
        self.heard.borrow_mut().clear();
    }
}

/// Memory store that counts writes and can be told to reject them.
#[derive(Debug, Clone, Default)]
pub struct CountingStore {
    inner: Rc<RefCell<MemoryKeyValueStore>>,
    writes: Rc<RefCell<usize>>,
    reject_writes: Rc<RefCell<bool>>,
}

impl CountingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seeded(key: &str, value: &str) -> Self {
        let store = Self::default();
        *store.inner.borrow_mut() = MemoryKeyValueStore::with_entry(key, value);
        store
    }

    pub fn writes(&self) -> usize {
        *self.writes.borrow()
    }

    pub fn reject_writes(&self, reject: bool) {
        *self.reject_writes.borrow_mut() = reject;
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.inner.borrow().get_item(key).unwrap()
    }
}

impl KeyValueStore for CountingStore {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        self.inner.borrow().get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> StoreResult<()> {
        if *self.reject_writes.borrow() {
            return Err(StoreError::WriteRejected("quota exceeded".to_string()));
        }
        *self.writes.borrow_mut() += 1;
        self.inner.borrow_mut().set_item(key, value)
    }
}
