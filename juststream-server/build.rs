use static_files::resource_dir;

const SITE_DIST: &str = "../juststream-site/dist";

fn main() -> std::io::Result<()> {
    built::write_built_file()?;

    println!("cargo::rerun-if-changed={SITE_DIST}");
    // Produced by trunk, absent on a fresh checkout
    std::fs::create_dir_all(SITE_DIST)?;
    resource_dir(SITE_DIST).build()
}
