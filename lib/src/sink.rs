/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::io::Write;

/// Destination for a rendered rule file. The whole file is handed over
/// in a single call.
pub trait Sink {
    fn accept(&mut self, bytes: &[u8]) -> std::io::Result<()>;
}

impl<W: Write> Sink for W {
    fn accept(&mut self, bytes: &[u8]) -> std::io::Result<()> {
        self.write_all(bytes)?;
        self.flush()
    }
}
