//! Section navigation: camera retargeting plus document scroll.

use super::camera::{CameraController, CameraPose};
use super::config::SectionTarget;
use super::host::SceneHost;
use fnv::FnvHashMap;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum NavigateError {
    #[error("unknown section `{0}`")]
    UnknownSection(String),
}

/// Section id -> camera pose. Read-only once built.
#[derive(Clone, Debug, Default)]
pub struct NavigationTable {
    entries: FnvHashMap<String, CameraPose>,
}

impl NavigationTable {
    pub fn from_sections(sections: &[SectionTarget]) -> Self {
        let entries = sections
            .iter()
            .map(|s| {
                (
                    s.id.clone(),
                    CameraPose {
                        position: s.position,
                        look_at: s.look_at,
                    },
                )
            })
            .collect();
        Self { entries }
    }

    pub fn get(&self, section_id: &str) -> Option<CameraPose> {
        self.entries.get(section_id).copied()
    }

    pub fn contains(&self, section_id: &str) -> bool {
        self.entries.contains_key(section_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub struct NavigationDispatcher {
    table: NavigationTable,
}

impl NavigationDispatcher {
    pub fn new(table: NavigationTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &NavigationTable {
        &self.table
    }

    /// Retarget the camera and scroll the page. Leaves everything untouched
    /// for unknown ids.
    pub fn try_navigate(
        &self,
        section_id: &str,
        camera: &mut CameraController,
        host: &mut dyn SceneHost,
    ) -> Result<CameraPose, NavigateError> {
        let pose = self
            .table
            .get(section_id)
            .ok_or_else(|| NavigateError::UnknownSection(section_id.to_string()))?;
        camera.retarget(pose);
        if !host.scroll_into_view(section_id) {
            log::debug!("[nav] no element for {}", section_id);
        }
        Ok(pose)
    }

    /// Like [`try_navigate`](Self::try_navigate) but never fails; unknown ids
    /// are logged and ignored.
    pub fn navigate_to(
        &self,
        section_id: &str,
        camera: &mut CameraController,
        host: &mut dyn SceneHost,
    ) -> bool {
        match self.try_navigate(section_id, camera, host) {
            Ok(pose) => {
                log::info!(
                    "[nav] {} -> eye=({:.2},{:.2},{:.2})",
                    section_id,
                    pose.position.x,
                    pose.position.y,
                    pose.position.z
                );
                true
            }
            Err(e) => {
                log::warn!("[nav] {}", e);
                false
            }
        }
    }
}
