//! Ownership ledger for GPU-resident assets of a mount

use bevy::prelude::*;

use crate::sky::SkyMaterial;

fn push_unique<T: PartialEq>(items: &mut Vec<T>, item: T) {
    if !items.contains(&item) {
        items.push(item);
    }
}

/// Counts of what a teardown released
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DisposalReport {
    pub images: usize,
    pub meshes: usize,
    pub materials: usize,
    /// Tracked ids that were already gone from their store
    pub missing: usize,
}

/// Every asset created for the current mount, each id recorded once.
///
/// Shared assets (the body icosphere) are tracked once no matter how many
/// entities use them, so disposal removes each exactly once.
#[derive(Resource, Default, Debug)]
pub struct SceneLedger {
    images: Vec<AssetId<Image>>,
    meshes: Vec<AssetId<Mesh>>,
    standard_materials: Vec<AssetId<StandardMaterial>>,
    sky_materials: Vec<AssetId<SkyMaterial>>,
}

impl SceneLedger {
    pub fn track_image(&mut self, id: AssetId<Image>) {
        push_unique(&mut self.images, id);
    }

    pub fn track_mesh(&mut self, id: AssetId<Mesh>) {
        push_unique(&mut self.meshes, id);
    }

    pub fn track_standard_material(&mut self, id: AssetId<StandardMaterial>) {
        push_unique(&mut self.standard_materials, id);
    }

    pub fn track_sky_material(&mut self, id: AssetId<SkyMaterial>) {
        push_unique(&mut self.sky_materials, id);
    }

    pub fn len(&self) -> usize {
        self.images.len()
            + self.meshes.len()
            + self.standard_materials.len()
            + self.sky_materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove every tracked asset from its store, leaves first: textures,
    /// then geometry, then materials. The ledger is empty afterwards.
    pub fn dispose(
        &mut self,
        images: &mut Assets<Image>,
        meshes: &mut Assets<Mesh>,
        standard_materials: &mut Assets<StandardMaterial>,
        sky_materials: &mut Assets<SkyMaterial>,
    ) -> DisposalReport {
        let mut report = DisposalReport::default();

        for id in self.images.drain(..) {
            match images.remove(id) {
                Some(_) => report.images += 1,
                None => report.missing += 1,
            }
        }
        for id in self.meshes.drain(..) {
            match meshes.remove(id) {
                Some(_) => report.meshes += 1,
                None => report.missing += 1,
            }
        }
        for id in self.standard_materials.drain(..) {
            match standard_materials.remove(id) {
                Some(_) => report.materials += 1,
                None => report.missing += 1,
            }
        }
        for id in self.sky_materials.drain(..) {
            match sky_materials.remove(id) {
                Some(_) => report.materials += 1,
                None => report.missing += 1,
            }
        }

        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::textures::Placeholder;

    #[test]
    fn test_shared_assets_dispose_once() {
        let mut ledger = SceneLedger::default();
        let mut images = Assets::<Image>::default();
        let mut meshes = Assets::<Mesh>::default();
        let mut standard = Assets::<StandardMaterial>::default();
        let mut sky = Assets::<SkyMaterial>::default();

        let sphere = meshes.add(Sphere::new(1.0).mesh().ico(2).unwrap());
        let texture = images.add(Placeholder::White.image());
        let material = standard.add(StandardMaterial::default());

        // Two bodies sharing the same sphere.
        ledger.track_mesh(sphere.id());
        ledger.track_mesh(sphere.id());
        ledger.track_image(texture.id());
        ledger.track_standard_material(material.id());
        assert_eq!(ledger.len(), 3);

        let report = ledger.dispose(&mut images, &mut meshes, &mut standard, &mut sky);
        assert_eq!(
            report,
            DisposalReport {
                images: 1,
                meshes: 1,
                materials: 1,
                missing: 0
            }
        );
        assert!(ledger.is_empty());
        assert!(meshes.get(sphere.id()).is_none());

        let again = ledger.dispose(&mut images, &mut meshes, &mut standard, &mut sky);
        assert_eq!(again, DisposalReport::default());
    }

    #[test]
    fn test_already_removed_assets_are_reported() {
        let mut ledger = SceneLedger::default();
        let mut images = Assets::<Image>::default();
        let texture = images.add(Placeholder::Black.image());
        ledger.track_image(texture.id());
        images.remove(texture.id());

        let report = ledger.dispose(
            &mut images,
            &mut Assets::default(),
            &mut Assets::default(),
            &mut Assets::default(),
        );
        assert_eq!(report.missing, 1);
        assert_eq!(report.images, 0);
    }
}
