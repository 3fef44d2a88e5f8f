//! [`Command`] for attaching uploaded images to a [`Listing`].

use common::operations::Save;
use tracerr::Traced;
use tracing as log;

#[cfg(doc)]
use crate::domain::Listing;
use crate::{
    domain::listing::{self, image},
    infra::{storage, Storage},
    Service,
};

use super::Command;

/// [`Command`] for storing the uploaded images of a [`Listing`].
///
/// Resolves to the [`image::Url`]s of the stored images in their upload
/// order. Files with an empty name or an extension not listed in
/// [`image::ALLOWED_EXTENSIONS`] are skipped silently.
///
/// Not transactional: if storing some image fails, the images stored before
/// it remain in the [`Storage`].
#[derive(Clone, Debug)]
pub struct AttachImages {
    /// ID of the [`Listing`] the images are uploaded for.
    pub listing_id: listing::Id,

    /// Uploaded image files.
    pub files: Vec<image::Upload>,
}

impl<Db, St> Command<AttachImages> for Service<Db, St>
where
    St: Storage<
        Save<storage::File>,
        Ok = image::Url,
        Err = Traced<storage::Error>,
    >,
{
    type Ok = Vec<image::Url>;
    type Err = Traced<ExecutionError>;

    async fn execute(
        &self,
        cmd: AttachImages,
    ) -> Result<Self::Ok, Self::Err> {
        let AttachImages { listing_id, files } = cmd;

        let mut urls = Vec::with_capacity(files.len());
        for image::Upload { filename, bytes } in files {
            if filename.is_empty() {
                continue;
            }
            if !image::is_allowed(&filename) {
                log::debug!(
                    "skipping `{filename}` upload for `Listing(id: \
                     {listing_id})`: extension is not allowed",
                );
                continue;
            }

            let file = storage::File {
                name: image::StorageName::new(listing_id, &filename),
                bytes,
            };
            urls.push(
                self.storage()
                    .execute(Save(file))
                    .await
                    .map_err(tracerr::wrap!())?,
            );
        }
        Ok(urls)
    }
}

/// Error of [`AttachImages`] [`Command`] execution.
pub type ExecutionError = storage::Error;

#[cfg(test)]
mod spec {
    use common::Handler as _;

    use crate::{
        domain::listing::{self, image},
        infra::{database, storage},
        Service,
    };

    use super::AttachImages;

    fn upload(filename: &str) -> image::Upload {
        image::Upload {
            filename: filename.to_owned(),
            bytes: filename.as_bytes().to_vec(),
        }
    }

    fn service() -> Service<database::Memory, storage::Memory> {
        Service::new(
            database::Memory::default(),
            storage::Memory::new("/static/uploads"),
        )
    }

    #[tokio::test]
    async fn stores_allowed_images_in_upload_order() {
        let svc = service();

        let urls = svc
            .execute(AttachImages {
                listing_id: listing::Id::new(4).unwrap(),
                files: vec![
                    upload("front.jpg"),
                    upload("virus.EXE"),
                    upload(""),
                    upload("Back Yard.PNG"),
                    upload("plan.pdf"),
                    upload("anim.gif"),
                ],
            })
            .await
            .unwrap();

        assert_eq!(
            urls.iter().map(ToString::to_string).collect::<Vec<_>>(),
            [
                "/static/uploads/4_front.jpg",
                "/static/uploads/4_Back_Yard.PNG",
                "/static/uploads/4_anim.gif",
            ],
        );
        assert_eq!(svc.storage().count().await, 3);
        assert_eq!(
            svc.storage()
                .get(&image::StorageName::new(
                    listing::Id::new(4).unwrap(),
                    "front.jpg",
                ))
                .await
                .unwrap(),
            b"front.jpg",
        );
    }

    #[tokio::test]
    async fn yields_nothing_without_valid_images() {
        let svc = service();

        let urls = svc
            .execute(AttachImages {
                listing_id: listing::Id::FIRST,
                files: vec![upload("photo.EXE"), upload("")],
            })
            .await
            .unwrap();

        assert!(urls.is_empty());
        assert_eq!(svc.storage().count().await, 0);
    }

    #[tokio::test]
    async fn keeps_images_stored_before_failure() {
        let storage = storage::Flaky::new("1_b.png");
        let inner = storage.inner.clone();
        let svc = Service::new(database::Memory::default(), storage);

        let err = svc
            .execute(AttachImages {
                listing_id: listing::Id::FIRST,
                files: vec![upload("a.png"), upload("b.png"), upload("c.png")],
            })
            .await
            .unwrap_err();

        assert!(matches!(err.as_ref(), storage::Error::Io(_)));
        assert_eq!(inner.count().await, 1);
    }
}
