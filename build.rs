fn main() {
    #[cfg(windows)]
    {
        let res = winres::WindowsResource::new();
        res.compile().expect("Failed to compile Windows resources");
    }
}
