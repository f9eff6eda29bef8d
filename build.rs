fn main() {
    // winres only applies to Windows targets
    #[cfg(target_os = "windows")]
    {
        let mut res = winres::WindowsResource::new();
        if std::path::Path::new("assets/icon.ico").exists() {
            res.set_icon("assets/icon.ico");
        }
        res.set("ProductName", "ripchord-transposer");
        res.set("FileDescription", "Ripchord preset transposer");
        match res.compile() {
            Ok(_) => println!("cargo:warning=winres: resources embedded"),
            Err(e) => println!("cargo:warning=winres failed: {}", e),
        }
    }
}
