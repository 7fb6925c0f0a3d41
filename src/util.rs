use crate::deferred_now::DeferredNow;
use crate::entry::Entry;
use crate::formats::FormatFunction;
use std::cell::RefCell;
use std::io::Write;

#[cfg(test)]
use std::{
    io::Cursor,
    sync::{Arc, Mutex},
};

pub(crate) const ERR_WRITING: &str = "writing failed";
pub(crate) const ERR_FORMATTING: &str = "formatting failed";
pub(crate) const ERR_FLUSHING: &str = "flushing failed";

pub(crate) fn write_err(msg: &str, err: &std::io::Error) {
    eprintln!("[svclog] {msg} with {err}");
}

pub(crate) fn io_err(s: &'static str) -> std::io::Error {
    std::io::Error::new(std::io::ErrorKind::Other, s)
}

// Thread-local line buffer
pub(crate) fn buffer_with<F>(f: F)
where
    F: FnOnce(&RefCell<Vec<u8>>),
{
    thread_local! {
        static BUFFER: RefCell<Vec<u8>> = RefCell::new(Vec::with_capacity(200));
    }
    BUFFER.with(f);
}

// Format the entry into the thread-local buffer, append the newline, and
// write the complete line with a single write_all so that concurrent writers
// cannot interleave mid-line.
pub(crate) fn write_buffered(
    format_function: FormatFunction,
    now: &mut DeferredNow,
    entry: &Entry,
    w: &mut dyn Write,
    #[cfg(test)] o_validation_buffer: Option<&Arc<Mutex<Cursor<Vec<u8>>>>>,
) -> Result<(), std::io::Error> {
    let mut result: Result<(), std::io::Error> = Ok(());

    buffer_with(|tl_buf| match tl_buf.try_borrow_mut() {
        Ok(mut buffer) => {
            (format_function)(&mut *buffer, now, entry)
                .unwrap_or_else(|e| write_err(ERR_FORMATTING, &e));
            buffer
                .write_all(b"\n")
                .unwrap_or_else(|e| write_err(ERR_FORMATTING, &e));

            result = w.write_all(&buffer).map_err(|e| {
                write_err(ERR_WRITING, &e);
                e
            });

            #[cfg(test)]
            if let Some(valbuf) = o_validation_buffer {
                if let Ok(mut vb) = valbuf.lock() {
                    vb.write_all(&buffer).ok();
                }
            }

            buffer.clear();
        }
        Err(_e) => {
            // We arrive here in the rare cases of recursive logging
            // (e.g. log calls in Debug or Display implementations)
            let mut tmp_buf = Vec::<u8>::with_capacity(200);
            (format_function)(&mut tmp_buf, now, entry)
                .unwrap_or_else(|e| write_err(ERR_FORMATTING, &e));
            tmp_buf
                .write_all(b"\n")
                .unwrap_or_else(|e| write_err(ERR_FORMATTING, &e));

            result = w.write_all(&tmp_buf).map_err(|e| {
                write_err(ERR_WRITING, &e);
                e
            });

            #[cfg(test)]
            if let Some(valbuf) = o_validation_buffer {
                if let Ok(mut vb) = valbuf.lock() {
                    vb.write_all(&tmp_buf).ok();
                }
            }
        }
    });
    result
}
