use crate::test_utils::*;
use crate::{PageWindow, WindowConfig};
use futures::{Stream, StreamExt};

#[tokio::test(flavor = "current_thread")]
async fn windows_stream() {
    let window = numbers_window(75, 30, 2);
    let windows: Vec<_> = window.windows_stream().collect().await;

    assert_eq!(windows.len(), 2, "There should be 2 windows");
    assert_eq!(windows[0], &numbers(60)[..]);
    assert_eq!(windows[1], &numbers(75)[30..]);

    assert_eq!(
        window.view_pages(),
        1..=2,
        "Streaming must not move the window"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn windows_stream_matches_windows() {
    for (len, items_per_page, window_width) in [(0, 3, 2), (7, 3, 1), (100, 9, 4), (10, 1, 10)] {
        let window = numbers_window(len, items_per_page, window_width);

        let streamed: Vec<_> = window.windows_stream().collect().await;
        let iterated: Vec<_> = window.windows().collect();

        assert_eq!(
            streamed, iterated,
            "len = {len}, items_per_page = {items_per_page}, window_width = {window_width}"
        );
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn into_windows_stream() {
    fn consumed_window() -> impl Stream<Item = Vec<Record>> {
        let mut window = PageWindow::new(records(50), WindowConfig::new(10, 2)).unwrap();
        window.go_next();
        window.into_windows_stream()
    }

    let handle = tokio::spawn(async {
        consumed_window()
            .map(|items| items.iter().map(|r| r.id).collect::<Vec<_>>())
            .collect::<Vec<_>>()
            .await
    });

    let ids = handle.await.unwrap();

    assert_eq!(ids.len(), 3, "Windows [2, 3], [3, 4] and [4, 5] are expected");
    assert_eq!(ids[0], (11..=30).collect::<Vec<_>>());
    assert_eq!(ids[1], (21..=40).collect::<Vec<_>>());
    assert_eq!(ids[2], (31..=50).collect::<Vec<_>>());
}

#[tokio::test(flavor = "current_thread")]
async fn into_windows_stream_of_empty_source() {
    let window: PageWindow<Vec<u8>> = PageWindow::default();
    let windows: Vec<_> = window.into_windows_stream().collect().await;

    assert_eq!(windows, [Vec::<u8>::new()]);
}
