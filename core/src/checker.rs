use log::{debug, error, info, warn};

use crate::error::Result;
use crate::models::backend_entry::{BackendEntrySet, Network};
use crate::models::comparison::ComparisonResult;
use crate::models::playlist_entry::PlaylistEntrySet;
use crate::models::report::{notification_body, SourceReport, EMAIL_SUBJECT};
use crate::notify::Notifier;
use crate::tvh_conn::{PlaylistSource, TunerBackend};

/// Check one network's playlist against the muxes the backend holds for it.
/// Fetch failures end up in the report instead of being returned.
pub async fn check_network(
    backend: &dyn TunerBackend,
    playlists: &dyn PlaylistSource,
    network: &Network,
    playlist_url: &str,
) -> SourceReport {
    let network_name = network.display_name().to_string();
    let failed = |message: String| SourceReport::Failed {
        playlist_url: playlist_url.to_string(),
        network_name: network_name.clone(),
        message,
    };

    let content = match playlists.fetch_playlist(playlist_url).await {
        Ok(content) => content,
        Err(e) => {
            error!("[!] Error fetching playlist {}: {}", playlist_url, e);
            return failed(e.to_string());
        }
    };
    let playlist = PlaylistEntrySet::parse(&content);
    debug!("[?] parsed {} entries from {}", playlist.len(), playlist_url);

    let muxes = match backend.muxes().await {
        Ok(muxes) => muxes,
        Err(e) => {
            error!("[!] Error fetching muxes for {}: {}", playlist_url, e);
            return failed(e.to_string());
        }
    };
    let mux_set = BackendEntrySet::from_muxes(&muxes, &network.uuid);
    debug!(
        "[?] {} of {} muxes belong to network {}",
        mux_set.len(),
        muxes.len(),
        network.uuid
    );

    let comparison = ComparisonResult::compare(&playlist, &mux_set);
    info!(
        "[+] network '{}': {} change(s)",
        network_name,
        comparison.change_count()
    );

    SourceReport::Checked {
        playlist_url: playlist_url.to_string(),
        network_name,
        comparison,
    }
}

/// Walk every M3U-fed network, one after the other.
pub async fn check_networks(
    backend: &dyn TunerBackend,
    playlists: &dyn PlaylistSource,
) -> Result<Vec<SourceReport>> {
    let networks = backend.networks().await?;
    let mut reports = Vec::new();

    for network in &networks {
        let Some(playlist_url) = network.playlist_url() else {
            debug!("[-] skipping network '{}': no M3U playlist", network.display_name());
            continue;
        };

        info!(
            "[-] Checking playlist of network '{}': {}",
            network.display_name(),
            playlist_url
        );
        reports.push(check_network(backend, playlists, network, playlist_url).await);
    }

    Ok(reports)
}

/// Mail the aggregate report. Never fails the run.
pub async fn send_notification(notifier: &dyn Notifier, reports: &[SourceReport]) {
    let body = notification_body(reports);
    match notifier.notify(EMAIL_SUBJECT, &body).await {
        Ok(()) => info!("[+] Email sent successfully."),
        Err(e) => warn!("[!] Failed to send email: {}", e),
    }
}

pub async fn run(
    backend: &dyn TunerBackend,
    playlists: &dyn PlaylistSource,
    notifier: Option<&dyn Notifier>,
) -> Result<Vec<SourceReport>> {
    let reports = check_networks(backend, playlists).await?;

    match notifier {
        Some(notifier) => send_notification(notifier, &reports).await,
        None => debug!("[-] email not configured, skipping notification"),
    }

    Ok(reports)
}
