use std::fs;
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

const BACKUP_SUFFIX: &str = ".safe";

#[derive(Clone, Copy)]
pub enum FlatDbFileMode {
    RandomWrites,
    ReadOnly,
}

//Whole-file reads and rewrites. Catalog, tablespace and options files are small JSON documents
pub struct FlatDbFile {
    file: File,
    path: PathBuf,

    size_bytes: usize,
    mode: FlatDbFileMode,
}

impl FlatDbFile {
    pub fn create(
        path: &Path,
        data: &[u8],
        mode: FlatDbFileMode
    ) -> Result<FlatDbFile, std::io::Error> {
        let mut file = Self::open(path, mode)?;
        file.write(data)?;
        Ok(file)
    }

    pub fn open(path: &Path, mode: FlatDbFileMode) -> Result<FlatDbFile, std::io::Error> {
        let is_read_only = matches!(mode, FlatDbFileMode::ReadOnly);
        let file: File = OpenOptions::new()
            .write(!is_read_only)
            .create(!is_read_only) //Create file if it doest exist
            .read(true)
            .open(path)?;
        let metadata = file.metadata()?;

        let mut file = FlatDbFile {
            size_bytes: metadata.len() as usize,
            path: path.to_path_buf(),
            file,
            mode,
        };

        if !Self::is_backup_path(path) && !is_read_only {
            file.recover_from_backup()?;
        }

        Ok(file)
    }

    //A backup left behind means the last save_write() crashed before finishing
    fn recover_from_backup(&mut self) -> Result<(), std::io::Error> {
        let backup_path = Self::create_file_backup_path(self.path.as_path());

        if backup_path.exists() {
            let mut backup_file = FlatDbFile::open(backup_path.as_path(), FlatDbFileMode::ReadOnly)?;
            let backup_contents = backup_file.read_all()?;

            self.clear()?;
            self.write(&backup_contents)?;
            self.fsync()?;

            backup_file.delete()?;
        }

        Ok(())
    }

    pub fn read_all(&mut self) -> Result<Vec<u8>, std::io::Error> {
        let mut buff: Vec<u8> = Vec::with_capacity(self.size_bytes);
        self.file.seek(SeekFrom::Start(0))?;
        self.file.read_to_end(&mut buff)?;
        Ok(buff)
    }

    pub fn clear(&mut self) -> Result<(), std::io::Error> {
        self.size_bytes = 0;
        self.file.set_len(0)?;
        self.file.seek(SeekFrom::Start(0))?;
        Ok(())
    }

    pub fn delete(&self) -> Result<(), std::io::Error> {
        fs::remove_file(self.path.as_path())
    }

    pub fn size(&self) -> usize {
        self.size_bytes
    }

    pub fn fsync(&self) -> Result<(), std::io::Error> {
        self.file.sync_all()
    }

    pub fn write(&mut self, bytes: &[u8]) -> Result<(), std::io::Error> {
        self.size_bytes += bytes.len();
        self.file.write_all(bytes)
    }

    //Replaces the whole content of the file. The old content is kept in a backup file
    //until the new one has been written and fsynced
    pub fn save_write(&mut self, bytes: &[u8]) -> Result<(), std::io::Error> {
        match self.mode {
            FlatDbFileMode::RandomWrites => {
                let backup_path = Self::create_file_backup_path(self.path.as_path());
                fs::copy(self.path.as_path(), backup_path.as_path())?;
                self.clear()?;
                self.write(bytes)?;
                self.fsync()?;
                fs::remove_file(backup_path.as_path())
            },
            FlatDbFileMode::ReadOnly => Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied, "file opened in read only mode"
            )),
        }
    }

    fn is_backup_path(path: &Path) -> bool {
        path.to_string_lossy().ends_with(BACKUP_SUFFIX)
    }

    fn create_file_backup_path(path: &Path) -> PathBuf {
        PathBuf::from(format!("{}{}", path.to_string_lossy(), BACKUP_SUFFIX))
    }
}
