//! Locating and loading image resources
//!
//! Logical resource names such as `"toolbar/pencil.png"` are mapped to file
//!   system paths by a [ResolvePath] implementation. [ResourceDir] resolves
//!   names relative to a base directory, configured through the
//!   `PAINTCORE_RES_DIR` environment variable or found by searching for a
//!   `res` directory.
//!
//! [ResolvePath]: trait.ResolvePath.html
//! [ResourceDir]: struct.ResourceDir.html

use crate::buffer::PixelBuffer;
use crate::error::{ImageError, Result};
use crate::png::decode_png;
use crate::tga::{decode_tga, encode_tga};

use std::env;
use std::path::{Path, PathBuf};

/// Environment variable holding the resource directory
pub const RES_DIR_ENV : &str = "PAINTCORE_RES_DIR";

const RES_DIR_NAME : &str = "res";

/// Maps a logical resource name to a path
pub trait ResolvePath {
    fn resolve(&self, name: &str) -> PathBuf;
}

/// Resources stored below a base directory
#[derive(Debug,Clone,PartialEq,Eq)]
pub struct ResourceDir {
    base: PathBuf,
}

impl ResourceDir {
    pub fn new<P: AsRef<Path>>(base: P) -> Self {
        Self { base: base.as_ref().to_path_buf() }
    }
    /// Base directory from `PAINTCORE_RES_DIR`, else the first `res`
    ///   directory found by [find_res_dir], else `./res`
    ///
    /// [find_res_dir]: fn.find_res_dir.html
    pub fn from_env() -> Self {
        if let Some(dir) = env::var_os(RES_DIR_ENV) {
            return Self::new(dir);
        }
        match find_res_dir() {
            Some(dir) => Self::new(dir),
            None => Self::new(RES_DIR_NAME),
        }
    }
    pub fn base(&self) -> &Path {
        &self.base
    }
}

impl ResolvePath for ResourceDir {
    fn resolve(&self, name: &str) -> PathBuf {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.base.join(p)
        }
    }
}

fn res_dir_in(dir: &Path) -> Option<PathBuf> {
    let res = dir.join(RES_DIR_NAME);
    if res.is_dir() { Some(res) } else { None }
}

/// Search for a `res` directory
///
/// The current directory is checked first, then every ancestor of the
///   running executable
pub fn find_res_dir() -> Option<PathBuf> {
    let cwd = env::current_dir().ok();
    let exe = env::current_exe().ok();
    let exe_dirs = exe.iter().flat_map(|e| e.ancestors().skip(1));
    search_res_dir(cwd.iter().map(|p| p.as_path()).chain(exe_dirs))
}

/// First `res` directory directly below one of `dirs`, in order
pub fn search_res_dir<I, P>(dirs: I) -> Option<PathBuf>
    where I: IntoIterator<Item = P>, P: AsRef<Path>
{
    dirs.into_iter().find_map(|d| res_dir_in(d.as_ref()))
}

/// Read the whole resource `name`
pub fn read_resource<R: ResolvePath + ?Sized>(res: &R, name: &str) -> Result<Vec<u8>> {
    let path = res.resolve(name);
    std::fs::read(&path).map_err(|source| {
        log::warn!("failed to open {}: {}", name, source);
        ImageError::ResourceNotFound { path, source }
    })
}

fn load_with<R, F>(res: &R, name: &str, decode: F) -> Result<PixelBuffer>
    where R: ResolvePath + ?Sized, F: FnOnce(&[u8]) -> Result<PixelBuffer>
{
    let data = read_resource(res, name)?;
    match decode(&data) {
        Ok(buf) => {
            log::info!("loaded {} ({}x{})", res.resolve(name).display(), buf.width(), buf.height());
            Ok(buf)
        },
        Err(e) => {
            log::warn!("failed to load {}: {}", name, e);
            Err(e)
        },
    }
}

/// Load a PNG resource
pub fn load_png<R: ResolvePath + ?Sized>(res: &R, name: &str, flip_y: bool) -> Result<PixelBuffer> {
    load_with(res, name, |d| decode_png(d, flip_y))
}

/// Load an uncompressed TGA resource
pub fn load_tga<R: ResolvePath + ?Sized>(res: &R, name: &str, flip_y: bool) -> Result<PixelBuffer> {
    load_with(res, name, |d| decode_tga(d, flip_y))
}

/// Save `buf` as a 24 bit uncompressed TGA resource
pub fn save_tga<R: ResolvePath + ?Sized>(res: &R, name: &str, buf: &PixelBuffer) -> Result<()> {
    let path = res.resolve(name);
    let data = encode_tga(buf)?;
    if let Err(e) = std::fs::write(&path, &data) {
        log::warn!("failed to save {}: {}", name, e);
        return Err(ImageError::Io(e));
    }
    log::info!("saved {}", path.display());
    Ok(())
}

impl PixelBuffer {
    /// Replace this buffer with the PNG resource `name`
    ///
    /// On failure the buffer is left untouched
    pub fn load_png<R: ResolvePath + ?Sized>(&mut self, res: &R, name: &str, flip_y: bool) -> Result<()> {
        *self = load_png(res, name, flip_y)?;
        Ok(())
    }
    /// Replace this buffer with the TGA resource `name`
    ///
    /// On failure the buffer is left untouched
    pub fn load_tga<R: ResolvePath + ?Sized>(&mut self, res: &R, name: &str, flip_y: bool) -> Result<()> {
        *self = load_tga(res, name, flip_y)?;
        Ok(())
    }
    /// Save this buffer as the TGA resource `name`
    pub fn save_tga<R: ResolvePath + ?Sized>(&self, res: &R, name: &str) -> Result<()> {
        save_tga(res, name, self)
    }
}
