// Embed the Windows executable icon when building on Windows.
// icon.ico sits next to Cargo.toml and is also loaded at runtime as the
// window icon.

fn main() {
    println!("cargo:rerun-if-changed=icon.ico");
    #[cfg(target_os = "windows")]
    {
        let icon_path = std::path::Path::new("icon.ico");
        if icon_path.exists() {
            let mut res = winres::WindowsResource::new();
            res.set_icon(icon_path.to_str().expect("icon path"));
            if let Err(e) = res.compile() {
                panic!(
                    "Failed to embed icon from icon.ico: {}. \
                     On Windows you need a resource compiler (e.g. rc.exe from Visual Studio Build Tools) in PATH.",
                    e
                );
            }
        }
    }
}
