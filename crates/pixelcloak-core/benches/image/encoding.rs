use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use image::{ImageBuffer, Rgb, RgbImage};
use pixelcloak_core::media::image::embed_in_place;
use pixelcloak_core::{Key, PixelCloak};

fn carrier() -> RgbImage {
    ImageBuffer::from_fn(512, 512, |x, y| {
        Rgb([(x ^ y) as u8, (x + y) as u8, (x * y) as u8])
    })
}

pub fn image_encoding(c: &mut Criterion) {
    c.bench_function("Image Encoding", |b| {
        let mut plain_image = carrier();
        let secret = vec![0x5a; 4096];

        b.iter(|| embed_in_place(&mut plain_image, &secret).expect("Cannot embed secret"))
    });

    c.bench_function("Image Encoding with encryption", |b| {
        let cloak = PixelCloak::with_key(&Key::generate());
        let secret = vec![0x5a; 4096];

        b.iter_batched(
            carrier,
            |cover| cloak.conceal(cover, &secret).expect("Cannot conceal secret"),
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, image_encoding);
criterion_main!(benches);
