use image::{ImageBuffer, Rgba};
use kumo::{CpuBackend, WordCloud, WordCloudConfig, color::Color};

#[allow(clippy::unwrap_used)]
fn main() {
    let config = WordCloudConfig {
        canvas_width: 250,
        canvas_height: 250,
        background_color: kumo::color::white(),
        padding_x: 5.0,
        padding_y: 5.0,
        auto_opacity: true,
        ..Default::default()
    };

    let mut cloud = WordCloud::new(config);
    cloud.words.insert_colored("oguzhan", 2, Color::new(0, 0, 0, 255));
    cloud.words.insert_colored("is", 2, Color::new(128, 128, 128, 255));
    cloud.words.insert_colored("on", 2, Color::new(255, 0, 0, 255));
    cloud.words.insert_colored("the", 2, Color::new(0, 255, 0, 255));
    for (text, frequency) in [
        ("rust", 9),
        ("layout", 5),
        ("font", 3),
        ("cloud", 7),
        ("pack", 1),
    ] {
        cloud.words.insert(text, frequency);
    }

    let mut backend = CpuBackend::with_system_fonts().expect("system fonts are required");

    let layout = cloud.layout(&backend).unwrap();
    println!(
        "Layout: trial font size={} packed={}x{} words={}",
        layout.trial_font_size,
        layout.extent.width,
        layout.extent.height,
        layout.words.len()
    );
    for word in &layout.words {
        println!(
            "  {:<8} size={:>5.1} at ({}, {})",
            word.text, word.font_size, word.rect.min.x, word.rect.min.y
        );
    }

    let timer = std::time::Instant::now();
    let image = cloud.generate(&mut backend).unwrap();
    let elapsed = timer.elapsed();

    println!(
        "Rendered image: width={} height={} (elapsed: {:.2?})",
        image.width, image.height, elapsed
    );

    // Ensure debug directory exists
    std::fs::create_dir_all("debug").expect("failed to create debug directory");

    let img_buffer: ImageBuffer<Rgba<u8>, Vec<u8>> =
        ImageBuffer::from_raw(image.width, image.height, image.pixels)
            .expect("image dimensions must match pixel buffer length");

    img_buffer
        .save("debug/sample_cloud.png")
        .expect("failed to save debug image");

    println!("Saved debug image to debug/sample_cloud.png");
}
