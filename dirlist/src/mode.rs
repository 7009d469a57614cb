//! Rendering of `st_mode` bits as the 10 character string `ls -l` prints.

pub const S_IFMT: u32 = 0o170000;
pub const S_IFSOCK: u32 = 0o140000;
pub const S_IFLNK: u32 = 0o120000;
pub const S_IFREG: u32 = 0o100000;
pub const S_IFBLK: u32 = 0o060000;
pub const S_IFDIR: u32 = 0o040000;
pub const S_IFCHR: u32 = 0o020000;
pub const S_IFIFO: u32 = 0o010000;

pub const S_ISUID: u32 = 0o4000;
pub const S_ISGID: u32 = 0o2000;
pub const S_ISVTX: u32 = 0o1000;

fn file_type_char(mode: u32) -> char {
    match mode & S_IFMT {
        S_IFDIR => 'd',
        S_IFLNK => 'l',
        S_IFREG => '-',
        S_IFCHR => 'c',
        S_IFBLK => 'b',
        S_IFIFO => 'p',
        S_IFSOCK => 's',
        _ => '?',
    }
}

/// One `rwx` triplet. `special` replaces the execute slot with `set` when
/// the execute bit is on and with `unset` when it is off.
fn push_triplet(out: &mut String, bits: u32, special: bool, set: char, unset: char) {
    out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
    out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
    let exec = bits & 0o1 != 0;
    out.push(match (special, exec) {
        (true, true) => set,
        (true, false) => unset,
        (false, true) => 'x',
        (false, false) => '-',
    });
}

/// Converts mode bits into a string such as `-rw-r--r--` or `drwxrwxrwt`.
pub fn file_mode(mode: u32) -> String {
    let mut out = String::with_capacity(10);
    out.push(file_type_char(mode));
    push_triplet(&mut out, (mode >> 6) & 0o7, mode & S_ISUID != 0, 's', 'S');
    push_triplet(&mut out, (mode >> 3) & 0o7, mode & S_ISGID != 0, 's', 'S');
    push_triplet(&mut out, mode & 0o7, mode & S_ISVTX != 0, 't', 'T');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_file() {
        assert_eq!(file_mode(S_IFREG | 0o644), "-rw-r--r--");
        assert_eq!(file_mode(S_IFREG | 0o755), "-rwxr-xr-x");
        assert_eq!(file_mode(S_IFREG), "----------");
    }

    #[test]
    fn test_file_types() {
        assert_eq!(file_mode(S_IFDIR | 0o755), "drwxr-xr-x");
        assert_eq!(file_mode(S_IFLNK | 0o777), "lrwxrwxrwx");
        assert_eq!(file_mode(S_IFCHR | 0o620), "crw--w----");
        assert_eq!(file_mode(S_IFBLK | 0o660), "brw-rw----");
        assert_eq!(file_mode(S_IFIFO | 0o644), "prw-r--r--");
        assert_eq!(file_mode(S_IFSOCK | 0o755), "srwxr-xr-x");
        assert_eq!(file_mode(0o644), "?rw-r--r--");
    }

    #[test]
    fn test_special_bits() {
        assert_eq!(file_mode(S_IFREG | S_ISUID | 0o755), "-rwsr-xr-x");
        assert_eq!(file_mode(S_IFREG | S_ISUID | 0o644), "-rwSr--r--");
        assert_eq!(file_mode(S_IFREG | S_ISGID | 0o755), "-rwxr-sr-x");
        assert_eq!(file_mode(S_IFREG | S_ISGID | 0o745), "-rwxr-Sr-x");
        assert_eq!(file_mode(S_IFDIR | S_ISVTX | 0o777), "drwxrwxrwt");
        assert_eq!(file_mode(S_IFDIR | S_ISVTX | 0o776), "drwxrwxrwT");
    }

    #[test]
    fn test_always_ten_chars() {
        for mode in [0, S_IFREG | 0o7777, S_IFDIR | 0o7000, 0o177777] {
            assert_eq!(file_mode(mode).chars().count(), 10);
        }
    }
}
