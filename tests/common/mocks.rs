//! Mock of a writable stream, e.g. a file the process may not write to.
use mockall::mock;

use std::io::{self, Write};

mock! {
    pub Stream {}
    impl Write for Stream {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize>;
        fn flush(&mut self) -> io::Result<()>;
    }
}
