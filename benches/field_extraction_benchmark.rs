//! Store page field extraction throughput

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use steam_price_card_lib::infrastructure::parsing::{
    FieldExtractor, StorePageParser, StorePageSelectors, VideoStrategy,
};

fn product_page(related_items: usize) -> String {
    let mut page = String::from(
        r#"<!DOCTYPE html><html><head>
<meta itemprop="priceCurrency" content="USD"><meta itemprop="price" content="19.99">
</head><body>
<div id="appHubAppName">Portal 2</div>
<div class="game_description_snippet">The sequel to the award-winning puzzle game.</div>
<img class="game_header_image_full" src="https://cdn.akamai.steamstatic.com/steam/apps/620/header.jpg">
<div id="highlight_player_area"><div data-mp4-source="https://video.akamai.steamstatic.com/store_trailers/620/movie480.mp4"></div></div>
<div id="developers_list"><a href="/developer/valve">Valve</a></div>
<input type="hidden" id="review_summary_num_reviews" value="412807">
"#,
    );
    for i in 0..related_items {
        page.push_str(&format!(
            r#"<div class="recommendation"><a href="/app/{i}"><img src="https://cdn.akamai.steamstatic.com/steam/apps/{i}/capsule.jpg"></a><span>Related {i}</span></div>"#
        ));
    }
    page.push_str(
        r#"<script>var movie = "https://video.akamai.steamstatic.com/store_trailers/620/movie_max.webm";</script></body></html>"#,
    );
    page
}

fn benchmark_extraction(c: &mut Criterion) {
    let regex_parser = StorePageParser::new().unwrap();
    let container_parser = StorePageParser::with_config(&StorePageSelectors {
        video_strategy: VideoStrategy::MediaContainer,
        ..StorePageSelectors::default()
    })
    .unwrap();

    let mut group = c.benchmark_group("extract_fields");
    for related_items in [0, 50, 500] {
        let page = product_page(related_items);
        group.bench_function(format!("trailer_regex/{related_items}"), |b| {
            b.iter(|| regex_parser.extract_fields(black_box(&page)));
        });
        group.bench_function(format!("media_container/{related_items}"), |b| {
            b.iter(|| container_parser.extract_fields(black_box(&page)));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_extraction);
criterion_main!(benches);
