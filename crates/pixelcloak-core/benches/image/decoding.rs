use criterion::{criterion_group, criterion_main, Criterion};
use image::{ImageBuffer, Rgb, RgbImage};
use pixelcloak_core::media::image::{embed, extract};

fn carrier() -> RgbImage {
    ImageBuffer::from_fn(512, 512, |x, y| {
        Rgb([(x ^ y) as u8, (x + y) as u8, (x * y) as u8])
    })
}

pub fn image_decoding(c: &mut Criterion) {
    c.bench_function("Image Decoding", |b| {
        let secret = vec![0x5a; 4096];
        let stego = embed(carrier(), &secret).expect("Cannot embed secret");

        b.iter(|| extract(&stego).expect("Failed to extract secret"))
    });
}

criterion_group!(benches, image_decoding);
criterion_main!(benches);
