
// struct to handle file buffers


use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use log::debug;
use crate::lib_utils::error::{MsaVcfError, Result};

pub struct FileBufferHelper {
    pub path: PathBuf,
    pub buffer_reader: BufReader<File>,
    pub line: String,
    pub line_number: usize,
}

impl FileBufferHelper {
    pub fn new(file: &Path) -> Result<FileBufferHelper> {
        // initialise instance of FileBufferHelper
        let file_open = File::open(file).map_err(|e| MsaVcfError::io(file, e))?;
        debug!("FileHelper created for: {:?}", file);
        Ok(Self {
            path: file.to_path_buf(),
            buffer_reader: BufReader::new(file_open),
            line: String::new(),
            line_number: 0,
        })
    }

    pub fn next_line(&mut self) -> Result<bool> {
        // replace the held line with the next one from the buffer
        // false once the end of the file is reached
        self.line.clear();
        let read = self.buffer_reader
            .read_line(&mut self.line)
            .map_err(|e| MsaVcfError::io(&self.path, e))?;
        if read == 0 {
            return Ok(false)
        }
        self.line_number += 1;
        Ok(true)
    }
}
