//! Test sinks shared by the integration tests

#![allow(dead_code)]

use std::io::{self, Write};

/// Sink that accepts a fixed number of write calls, then fails.
pub struct FailingSink {
    pub out: Vec<u8>,
    pub calls_left: usize,
}

impl FailingSink {
    pub fn new(calls_left: usize) -> Self {
        Self {
            out: Vec::new(),
            calls_left,
        }
    }
}

impl Write for FailingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.calls_left == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        self.calls_left -= 1;
        self.out.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Sink that takes at most `max` bytes per call.
pub struct Trickle {
    pub out: Vec<u8>,
    pub max: usize,
    pub flushed: bool,
}

impl Trickle {
    pub fn new(max: usize) -> Self {
        Self {
            out: Vec::new(),
            max,
            flushed: false,
        }
    }
}

impl Write for Trickle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = buf.len().min(self.max);
        self.out.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flushed = true;
        Ok(())
    }
}

/// Sink whose next `interrupts` write calls fail with `Interrupted`.
pub struct Interrupting {
    pub out: Vec<u8>,
    pub interrupts: usize,
}

impl Interrupting {
    pub fn new(interrupts: usize) -> Self {
        Self {
            out: Vec::new(),
            interrupts,
        }
    }
}

impl Write for Interrupting {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.interrupts > 0 {
            self.interrupts -= 1;
            return Err(io::ErrorKind::Interrupted.into());
        }
        self.out.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
