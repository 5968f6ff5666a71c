//! Native binding to the CKIP WordSeg shared library.
//!
//! The library exposes a C API with an explicit instance lifetime:
//! `WordSeg_New` / `WordSeg_InitData(ini)` / `WordSeg_ApplyList` /
//! `WordSeg_GetResultBegin`..`WordSeg_GetResultNext` / `WordSeg_Destroy`.
//! Strings cross the boundary as `wchar_t*`.
//!
//! [CkipSegmenter] owns one engine instance and releases it on [Drop],
//! whatever the exit path. Instances are not thread-safe; create one per
//! worker instead of sharing.
use std::ffi::CString;
use std::os::raw::{c_char, c_int, c_void};
use std::path::PathBuf;

use libloading::Library;
use log::debug;
use widestring::{WideCStr, WideCString, WideChar};

use crate::error::Error;

use super::Segmenter;

type NewFn = unsafe extern "C" fn() -> *mut c_void;
type InitDataFn = unsafe extern "C" fn(*mut c_void, *const c_char) -> bool;
type EnableLoggerFn = unsafe extern "C" fn(*mut c_void);
type ApplyListFn = unsafe extern "C" fn(*mut c_void, c_int, *const *const WideChar) -> bool;
type ResultFn = unsafe extern "C" fn(*mut c_void) -> *const WideChar;
type DestroyFn = unsafe extern "C" fn(*mut c_void) -> bool;

/// Resolved entry points. Plain fn pointers stay valid for as long as the
/// [Library] they come from is loaded.
struct Api {
    init_data: InitDataFn,
    enable_logger: EnableLoggerFn,
    apply_list: ApplyListFn,
    result_begin: ResultFn,
    result_next: ResultFn,
    destroy: DestroyFn,
}

impl Api {
    unsafe fn resolve(lib: &Library) -> Result<Self, Error> {
        Ok(Self {
            init_data: *lib.get(b"WordSeg_InitData\0")?,
            enable_logger: *lib.get(b"WordSeg_EnableConsoleLogger\0")?,
            apply_list: *lib.get(b"WordSeg_ApplyList\0")?,
            result_begin: *lib.get(b"WordSeg_GetResultBegin\0")?,
            result_next: *lib.get(b"WordSeg_GetResultNext\0")?,
            destroy: *lib.get(b"WordSeg_Destroy\0")?,
        })
    }
}

/// A configured CKIP WordSeg instance.
pub struct CkipSegmenter {
    // field order matters: handle is released before the library unloads
    handle: *mut c_void,
    api: Api,
    _lib: Library,
}

/// Paths needed to bring an engine up, kept separate from the instance so
/// worker threads can each open their own.
#[derive(Debug, Clone)]
pub struct CkipConfig {
    pub library: PathBuf,
    pub ini: PathBuf,
}

impl CkipSegmenter {
    /// Loads the shared library and initializes an instance from `ini`.
    pub fn open(config: &CkipConfig) -> Result<Self, Error> {
        debug!("loading wordseg library {:?}", config.library);
        let lib = unsafe { Library::new(&config.library) }?;
        let api = unsafe { Api::resolve(&lib) }?;

        let new_fn: NewFn = unsafe { *lib.get(b"WordSeg_New\0")? };
        let handle = unsafe { new_fn() };
        if handle.is_null() {
            return Err(Error::Segmenter("WordSeg_New returned null".to_string()));
        }

        let ini = CString::new(config.ini.to_string_lossy().as_bytes())
            .map_err(|e| Error::Segmenter(e.to_string()))?;
        let ok = unsafe { (api.init_data)(handle, ini.as_ptr()) };
        if !ok {
            unsafe { (api.destroy)(handle) };
            return Err(Error::Segmenter(format!(
                "loading {} failed",
                config.ini.display()
            )));
        }

        Ok(Self {
            handle,
            api,
            _lib: lib,
        })
    }

    /// Routes engine diagnostics to the console.
    pub fn enable_logger(&mut self) {
        unsafe { (self.api.enable_logger)(self.handle) };
    }
}

impl Segmenter for CkipSegmenter {
    fn apply_batch(&mut self, sentences: &[String]) -> Result<Vec<String>, Error> {
        if sentences.is_empty() {
            return Ok(Vec::new());
        }

        let wide: Vec<WideCString> = sentences
            .iter()
            .map(|s| WideCString::from_str(s))
            .collect::<Result<_, _>>()
            .map_err(|e| Error::Segmenter(e.to_string()))?;
        let pointers: Vec<*const WideChar> = wide.iter().map(|w| w.as_ptr()).collect();

        let ok = unsafe {
            (self.api.apply_list)(self.handle, pointers.len() as c_int, pointers.as_ptr())
        };
        if !ok {
            return Err(Error::Segmenter("WordSeg_ApplyList failed".to_string()));
        }

        let mut results = Vec::new();
        let mut cursor = unsafe { (self.api.result_begin)(self.handle) };
        while !cursor.is_null() {
            let line = unsafe { WideCStr::from_ptr_str(cursor) };
            results.push(line.to_string_lossy());
            cursor = unsafe { (self.api.result_next)(self.handle) };
        }

        Ok(results)
    }
}

impl Drop for CkipSegmenter {
    fn drop(&mut self) {
        unsafe { (self.api.destroy)(self.handle) };
    }
}
