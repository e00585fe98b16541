//! Properties tying extraction and rendering together

use std::convert::Infallible;

use ogp_meta::{
    Metadata, Opengraph, OpengraphAudio, OpengraphLocale, OpengraphMedia, TagEvent, extract,
    fold, render,
};
use proptest::prelude::*;

fn text() -> impl Strategy<Value = String> {
    r#"[a-zA-Z0-9 &<>"'/:._-]{0,16}"#
}

fn url() -> impl Strategy<Value = String> {
    "https://[a-z]{1,8}\\.example/[a-z0-9._-]{0,12}"
}

fn media() -> impl Strategy<Value = OpengraphMedia> {
    (url(), text(), text(), any::<u64>(), any::<u64>(), text()).prop_map(
        |(url, secure_url, mime_type, width, height, alt)| OpengraphMedia {
            url,
            secure_url,
            mime_type,
            width,
            height,
            alt,
        },
    )
}

fn audio() -> impl Strategy<Value = OpengraphAudio> {
    (url(), text(), text()).prop_map(|(url, secure_url, mime_type)| OpengraphAudio {
        url,
        secure_url,
        mime_type,
    })
}

fn locale() -> impl Strategy<Value = OpengraphLocale> {
    (text(), prop::collection::vec(text(), 0..3))
        .prop_map(|(locale, alternates)| OpengraphLocale { locale, alternates })
}

fn opengraph() -> impl Strategy<Value = Opengraph> {
    (
        text(),
        text(),
        prop::collection::vec(media(), 0..3),
        text(),
        prop::collection::vec(audio(), 0..3),
        text(),
        text(),
        prop::option::of(locale()),
        text(),
        prop::collection::vec(media(), 0..3),
    )
        .prop_map(
            |(
                title,
                og_type,
                images,
                url,
                audios,
                description,
                determiner,
                locale,
                site_name,
                videos,
            )| Opengraph {
                title,
                og_type,
                images,
                url,
                audios,
                description,
                determiner,
                locale,
                site_name,
                videos,
            },
        )
}

fn reextract(og: &Opengraph) -> Opengraph {
    let events = render(og)
        .iter()
        .map(|element| Ok::<TagEvent, Infallible>(element.to_tag_event()))
        .collect::<Vec<_>>();
    extract(events).unwrap()
}

#[test]
fn test_scenario_from_pairs() {
    let og = fold(&[
        Metadata::new("og:title", "A"),
        Metadata::new("og:title", "B"),
        Metadata::new("og:image", "u1"),
        Metadata::new("og:image:width", "x"),
        Metadata::new("og:image", "u2"),
        Metadata::new("og:image:height", "50"),
    ]);

    assert_eq!(og.title, "A");
    assert_eq!(og.images, vec![
        OpengraphMedia::new("u1"),
        OpengraphMedia {
            height: 50,
            ..OpengraphMedia::new("u2")
        },
    ]);
    assert!(og.videos.is_empty());
    assert!(og.locale.is_none());
}

#[test]
fn test_json_shape() {
    let og = Opengraph {
        og_type: "article".into(),
        images: vec![OpengraphMedia {
            width: 10,
            ..OpengraphMedia::new("a.png")
        }],
        ..Default::default()
    };

    let value = serde_json::to_value(&og).unwrap();
    assert_eq!(value["type"], "article");
    assert_eq!(value["images"][0]["url"], "a.png");
    assert_eq!(value["images"][0]["width"], 10);
    assert_eq!(value["locale"], serde_json::Value::Null);

    let back: Opengraph = serde_json::from_value(value).unwrap();
    assert_eq!(back, og);
}

proptest! {
    #[test]
    fn prop_render_then_extract_is_identity(og in opengraph()) {
        prop_assert_eq!(reextract(&og), og);
    }

    #[cfg(feature = "html")]
    #[test]
    fn prop_html_round_trip(og in opengraph()) {
        let parsed = Opengraph::from_string(&og.to_html()).unwrap();
        prop_assert_eq!(parsed, og);
    }

    #[test]
    fn prop_first_scalar_wins(values in prop::collection::vec("[a-z]{1,8}", 1..6)) {
        let pairs: Vec<Metadata> = values
            .iter()
            .map(|value| Metadata::new("og:site_name", value.as_str()))
            .collect();

        let og = fold(&pairs);
        prop_assert_eq!(og.site_name, values[0].clone());
    }

    #[test]
    fn prop_malformed_dimension_is_ignored(
        width in "[^0-9]{1,6}|[0-9]{1,4}[^0-9]{1,3}",
        title in "[a-z]{1,8}",
    ) {
        let og = fold(&[
            Metadata::new("og:video", "v.mp4"),
            Metadata::new("og:video:width", width.as_str()),
            Metadata::new("og:title", title.as_str()),
            Metadata::new("og:video:height", "480"),
        ]);

        prop_assert_eq!(og.videos[0].width, 0);
        prop_assert_eq!(og.videos[0].height, 480);
        prop_assert_eq!(og.title, title);
    }

    #[test]
    fn prop_orphan_details_never_appear(
        property in prop::sample::select(vec![
            "og:image:secure_url",
            "og:image:type",
            "og:image:width",
            "og:image:height",
            "og:image:alt",
            "og:video:secure_url",
            "og:video:width",
            "og:audio:type",
        ]),
        content in "[a-z0-9]{0,8}",
    ) {
        let og = fold(&[Metadata::new(property, content.as_str())]);
        prop_assert!(og.is_empty());
    }
}
