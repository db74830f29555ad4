use m3ucheck_core::tvh_conn::mock_tvh::MockTvh;
use m3ucheck_core::tvh_conn::{PlaylistSource, TunerBackend};

// Tests for the mock TVHeadend implementation
#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::block_on;

    #[test]
    fn test_network_and_mux_listing() {
        let mock = MockTvh::new();
        mock.add_network("net-1", "IPTV", "http://lists/iptv.m3u");
        mock.add_mux("net-1", "Arte", "pipe://arte");
        mock.add_mux("net-2", "ZDF", "pipe://zdf");

        let networks = block_on(mock.networks()).unwrap();
        assert_eq!(networks.len(), 1);
        assert_eq!(networks[0].display_name(), "IPTV");
        assert_eq!(networks[0].playlist_url(), Some("http://lists/iptv.m3u"));

        let muxes = block_on(mock.muxes()).unwrap();
        assert_eq!(muxes.len(), 2);
    }

    #[test]
    fn test_playlist_lookup() {
        let mock = MockTvh::new();
        mock.add_playlist("http://lists/iptv.m3u", "#EXTM3U\n");

        assert_eq!(
            block_on(mock.fetch_playlist("http://lists/iptv.m3u")).unwrap(),
            "#EXTM3U\n"
        );

        let err = block_on(mock.fetch_playlist("http://lists/missing.m3u")).unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_failing_mux_queries_recover() {
        let mock = MockTvh::new();
        mock.add_mux("net-1", "Arte", "pipe://arte");
        mock.fail_next_mux_queries(1);

        assert!(block_on(mock.muxes()).is_err());
        assert!(block_on(mock.muxes()).is_ok());
    }

    #[test]
    fn test_connection_simulation() {
        let mock = MockTvh::new();

        // Initially connected
        assert!(block_on(mock.networks()).is_ok());

        mock.simulate_disconnect();
        assert!(block_on(mock.networks()).is_err());
        assert!(block_on(mock.muxes()).is_err());

        mock.simulate_reconnect();
        assert!(block_on(mock.networks()).is_ok());
    }

    #[test]
    fn test_clones_share_state() {
        let mock = MockTvh::new();
        let handle = mock.clone();
        handle.add_network("net-1", "IPTV", "http://lists/iptv.m3u");

        assert_eq!(block_on(mock.networks()).unwrap().len(), 1);
    }
}
