// src/services/logo.rs

use std::path::{Path, PathBuf};

use image::{GenericImageView, ImageFormat};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogoError {
    #[error("A logo '{0}' não foi encontrada. Certifique-se de que o arquivo está no caminho configurado.")]
    NotFound(PathBuf),

    #[error("Erro ao carregar a logo: {0}")]
    Io(#[from] std::io::Error),

    #[error("Erro ao carregar a logo: {0}")]
    Decode(#[from] image::ImageError),
}

// Logo da empresa, lida uma vez na inicialização
#[derive(Debug, Clone)]
pub struct Logo {
    pub bytes: Vec<u8>,
    pub content_type: &'static str,
}

fn content_type_of(format: ImageFormat) -> &'static str {
    match format {
        ImageFormat::Png => "image/png",
        ImageFormat::Jpeg => "image/jpeg",
        ImageFormat::Gif => "image/gif",
        ImageFormat::WebP => "image/webp",
        ImageFormat::Bmp => "image/bmp",
        ImageFormat::Ico => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// Lê e confere a imagem. Quem chama transforma o erro em aviso:
/// a falta da logo nunca impede o formulário de funcionar.
pub fn load_logo(path: &Path) -> Result<Logo, LogoError> {
    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(LogoError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let format = image::guess_format(&bytes)?;
    let decoded = image::load_from_memory_with_format(&bytes, format)?;
    let (width, height) = decoded.dimensions();

    tracing::info!("🖼️ Logo carregada de {} ({}x{})", path.display(), width, height);

    Ok(Logo {
        bytes,
        content_type: content_type_of(format),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("logo.png");

        let err = load_logo(&path).unwrap_err();
        assert!(matches!(err, LogoError::NotFound(_)));
        assert!(err.to_string().contains("não foi encontrada"));
    }

    #[test]
    fn garbage_bytes_fail_to_decode() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"isto nao e uma imagem").unwrap();

        let err = load_logo(file.path()).unwrap_err();
        assert!(matches!(err, LogoError::Decode(_)));
        assert!(err.to_string().starts_with("Erro ao carregar a logo"));
    }

    #[test]
    fn loads_png() {
        let image = image::DynamicImage::new_rgb8(4, 2);
        let mut bytes = Vec::new();
        image.write_to(&mut bytes, image::ImageOutputFormat::Png).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&bytes).unwrap();

        let logo = load_logo(file.path()).unwrap();
        assert_eq!(logo.content_type, "image/png");
        assert_eq!(logo.bytes, bytes);
    }
}
