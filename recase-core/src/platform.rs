use anyhow::{Context, Result};
use std::fmt;
use std::path::Path;

/// Naming rules of the filesystem the tool is renaming on.
///
/// Implementations answer the two questions the planner needs: whether two
/// names differing only in case refer to the same entry, and how to make a
/// transformed name legal for the platform.
pub trait NamingAdapter {
    fn is_case_sensitive(&self) -> bool;
    fn sanitize_name(&self, name: &str) -> String;
}

/// Naming rules for POSIX-like filesystems.
///
/// Almost anything is a legal name here, so sanitization only strips shell
/// metacharacters that routinely break quoting in scripts, and replaces the
/// two bytes that cannot appear in a name at all (`/` and NUL).
pub struct PosixNaming {
    case_sensitive: std::sync::OnceLock<bool>,
}

impl PosixNaming {
    pub fn new() -> Self {
        Self {
            case_sensitive: std::sync::OnceLock::new(),
        }
    }
}

impl Default for PosixNaming {
    fn default() -> Self {
        Self::new()
    }
}

impl NamingAdapter for PosixNaming {
    fn is_case_sensitive(&self) -> bool {
        *self.case_sensitive.get_or_init(detect_case_sensitivity)
    }

    fn sanitize_name(&self, name: &str) -> String {
        name.chars()
            .filter_map(|c| match c {
                '`' | '\'' | '$' | '&' | '(' | ')' | '{' | '}' | '[' | ']' | ';' | '#' | '%'
                | '^' | '!' | '+' | '=' => None,
                '/' | '\0' => Some('_'),
                _ => Some(c),
            })
            .collect()
    }
}

/// Probe the temp filesystem: write a file with an uppercase marker in its
/// name and check whether the all-lowercase variant resolves to it. Errors
/// fall back to treating the filesystem as case sensitive, which is the
/// stricter assumption for collision detection.
fn detect_case_sensitivity() -> bool {
    let file = match tempfile::Builder::new()
        .prefix("recase_probe_UPPER")
        .suffix(".tmp")
        .tempfile()
    {
        Ok(f) => f,
        Err(_) => return true,
    };

    let lowered = match file.path().file_name().and_then(|n| n.to_str()) {
        Some(name) => file.path().with_file_name(name.to_lowercase()),
        None => return true,
    };

    !lowered.exists()
}

/// Naming rules for Windows filesystems: the NTFS/FAT illegal character set,
/// no trailing spaces or dots, and the reserved device names.
pub struct WindowsNaming;

const WINDOWS_RESERVED_NAMES: &[&str] = &[
    "CON", "PRN", "AUX", "NUL", "COM1", "COM2", "COM3", "COM4", "COM5", "COM6", "COM7", "COM8",
    "COM9", "LPT1", "LPT2", "LPT3", "LPT4", "LPT5", "LPT6", "LPT7", "LPT8", "LPT9",
];

// Device names are reserved regardless of extension, so only the part before
// the first dot counts.
fn is_reserved_name(name: &str) -> bool {
    let upper = name.to_uppercase();
    let base = upper.split('.').next().unwrap_or_default();
    WINDOWS_RESERVED_NAMES.contains(&base)
}

impl NamingAdapter for WindowsNaming {
    fn is_case_sensitive(&self) -> bool {
        false
    }

    fn sanitize_name(&self, name: &str) -> String {
        let replaced: String = name
            .chars()
            .map(|c| match c {
                '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
                _ => c,
            })
            .collect();

        let mut result = replaced
            .trim_end_matches(|c| c == ' ' || c == '.')
            .to_string();

        if is_reserved_name(&result) {
            result.insert(0, '_');
        }

        result
    }
}

/// Naming rules for the platform the process is running on.
#[cfg(windows)]
pub fn platform_adapter() -> Box<dyn NamingAdapter> {
    Box::new(WindowsNaming)
}

/// Naming rules for the platform the process is running on.
#[cfg(not(windows))]
pub fn platform_adapter() -> Box<dyn NamingAdapter> {
    Box::new(PosixNaming::new())
}

/// Filesystem-assigned identity of a directory.
///
/// Stable across renames of the directory itself, distinct for distinct
/// directories on one volume. Opaque to everything except the history store,
/// which sanitizes it into a bucket name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DirId(String);

impl DirId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DirId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves a path to its filesystem identity.
pub trait PathIdentifier {
    fn identify(&self, path: &Path) -> Result<DirId>;
}

/// The real filesystem: device and inode numbers on Unix, volume serial and
/// file index on Windows.
pub struct FsIdentifier;

#[cfg(unix)]
impl PathIdentifier for FsIdentifier {
    fn identify(&self, path: &Path) -> Result<DirId> {
        use std::os::unix::fs::MetadataExt;

        let meta = std::fs::metadata(path)
            .with_context(|| format!("failed to stat {}", path.display()))?;

        Ok(DirId::new(format!("{}:{}", meta.dev(), meta.ino())))
    }
}

#[cfg(windows)]
impl PathIdentifier for FsIdentifier {
    fn identify(&self, path: &Path) -> Result<DirId> {
        use anyhow::anyhow;
        use std::os::windows::ffi::OsStrExt;
        use winapi::um::fileapi::{
            CreateFileW, GetFileInformationByHandle, BY_HANDLE_FILE_INFORMATION, OPEN_EXISTING,
        };
        use winapi::um::handleapi::{CloseHandle, INVALID_HANDLE_VALUE};
        use winapi::um::winbase::FILE_FLAG_BACKUP_SEMANTICS;
        use winapi::um::winnt::{FILE_SHARE_DELETE, FILE_SHARE_READ, FILE_SHARE_WRITE};

        let wide: Vec<u16> = path
            .as_os_str()
            .encode_wide()
            .chain(std::iter::once(0))
            .collect();

        // SAFETY: `wide` is NUL-terminated and outlives both calls; the
        // handle is closed on every path out of the block.
        unsafe {
            let handle = CreateFileW(
                wide.as_ptr(),
                0,
                FILE_SHARE_READ | FILE_SHARE_WRITE | FILE_SHARE_DELETE,
                std::ptr::null_mut(),
                OPEN_EXISTING,
                FILE_FLAG_BACKUP_SEMANTICS,
                std::ptr::null_mut(),
            );
            if handle == INVALID_HANDLE_VALUE {
                return Err(anyhow!("failed to open {}", path.display()));
            }

            let mut info: BY_HANDLE_FILE_INFORMATION = std::mem::zeroed();
            let ok = GetFileInformationByHandle(handle, &mut info);
            CloseHandle(handle);
            if ok == 0 {
                return Err(anyhow!(
                    "failed to read file information for {}",
                    path.display()
                ));
            }

            let index = (u64::from(info.nFileIndexHigh) << 32) | u64::from(info.nFileIndexLow);
            Ok(DirId::new(format!("{}:{}", info.dwVolumeSerialNumber, index)))
        }
    }
}
