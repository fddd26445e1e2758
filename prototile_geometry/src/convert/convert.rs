use super::{ConvertOptions, DouglasPeucker, GeometryFlattener, Simplifier};
use crate::{
	ConvertError,
	geo::{CompositeGeometryTrait, GeoCollection, GeoFeature, GeoInput, GeoProperties, GeoValue, Geometry},
	proto::{ProtoFeature, ProtoGeometry},
};
use anyhow::{Error, Result};
use futures::{StreamExt, TryStreamExt, stream};
use log::trace;
use std::sync::Arc;

/// Converts decoded vector data into flattened proto features with the stock
/// simplifier. The crate's front door.
pub fn convert(input: &GeoInput, options: ConvertOptions) -> Result<Vec<ProtoFeature>> {
	FeatureConverter::new(options)?.convert(input)
}

/// Drives one conversion pass: resolves feature identity, expands
/// collections, flattens geometry and collects the proto features in input
/// order.
///
/// The converter holds no state besides its options, the squared tolerance
/// derived from them once, and the simplifier; it never mutates its input.
pub struct FeatureConverter<S: Simplifier = DouglasPeucker> {
	options: ConvertOptions,
	sq_tolerance: f64,
	simplifier: S,
}

impl FeatureConverter<DouglasPeucker> {
	pub fn new(options: ConvertOptions) -> Result<Self> {
		Self::with_simplifier(options, DouglasPeucker)
	}
}

impl<S: Simplifier> FeatureConverter<S> {
	/// Builds a converter around a caller-supplied point reducer.
	pub fn with_simplifier(options: ConvertOptions, simplifier: S) -> Result<Self> {
		options.validate()?;
		let sq_tolerance = options.squared_tolerance();
		Ok(Self {
			options,
			sq_tolerance,
			simplifier,
		})
	}

	#[must_use]
	pub fn options(&self) -> &ConvertOptions {
		&self.options
	}

	/// Converts a collection, a single feature or a bare geometry. The
	/// output sequence is order-preserving relative to the input; a feature
	/// without geometry contributes nothing. The first malformed or
	/// unsupported geometry aborts the whole call.
	pub fn convert(&self, input: &GeoInput) -> Result<Vec<ProtoFeature>> {
		let mut features = Vec::new();
		match input {
			GeoInput::Collection(collection) => {
				for (index, feature) in collection.features.iter().enumerate() {
					self.convert_feature(&mut features, feature, Some(index))?;
				}
			}
			GeoInput::Feature(feature) => self.convert_feature(&mut features, feature, None)?,
			GeoInput::Geometry(geometry) => {
				self.convert_geometry(&mut features, &None, &GeoProperties::new(), geometry)?;
			}
		}
		Ok(features)
	}

	fn convert_feature(&self, out: &mut Vec<ProtoFeature>, feature: &GeoFeature, index: Option<usize>) -> Result<()> {
		let Some(geometry) = &feature.geometry else {
			trace!("feature without geometry produces no output");
			return Ok(());
		};
		let id = self.resolve_id(feature, index);
		self.convert_geometry(out, &id, &feature.properties, geometry)
	}

	/// Feature identity, first match wins: the explicit id, the promoted
	/// property, the generated collection index, or nothing.
	fn resolve_id(&self, feature: &GeoFeature, index: Option<usize>) -> Option<GeoValue> {
		if let Some(id) = &feature.id {
			return Some(id.clone());
		}
		if let Some(key) = &self.options.promote_id {
			if let Some(value) = feature.properties.get(key) {
				return Some(value.clone());
			}
		}
		if self.options.generate_id {
			return Some(GeoValue::UInt(index.unwrap_or(0) as u64));
		}
		None
	}

	fn convert_geometry(
		&self,
		out: &mut Vec<ProtoFeature>,
		id: &Option<GeoValue>,
		properties: &GeoProperties,
		geometry: &Geometry,
	) -> Result<()> {
		if let Geometry::GeometryCollection(children) = geometry {
			// children inherit the already-resolved id and the parent's
			// properties; no wrapper feature is emitted
			for child in children {
				self.convert_geometry(out, id, properties, child)?;
			}
			return Ok(());
		}

		geometry
			.verify()
			.map_err(|source| ConvertError::MalformedGeometry(source.to_string()))?;

		let flattener = GeometryFlattener::new(self.sq_tolerance, &self.simplifier);

		if self.options.line_metrics {
			if let Geometry::MultiLineString(lines) = geometry {
				// exploded: start/end offsets only make sense per line
				for line in lines.iter() {
					let ring = flattener.flatten_ring(line.as_vec(), false);
					out.push(ProtoFeature::new(
						id.clone(),
						ProtoGeometry::LineString(ring),
						properties.clone(),
					));
				}
				return Ok(());
			}
		}

		let flattened = flattener.flatten(geometry)?;
		out.push(ProtoFeature::new(id.clone(), flattened, properties.clone()));
		Ok(())
	}
}

impl<S: Simplifier + Send + Sync + 'static> FeatureConverter<S> {
	/// Converts the features of a collection on a worker pool, one task per
	/// feature. Features are independent, so the only coordination is
	/// collecting results in input order; the output is identical to the
	/// sequential [`convert`](Self::convert). The first failed feature
	/// aborts the call.
	pub async fn convert_parallel(self: Arc<Self>, collection: GeoCollection) -> Result<Vec<ProtoFeature>> {
		let converted: Vec<Vec<ProtoFeature>> = stream::iter(collection.features.into_iter().enumerate())
			.map(|(index, feature)| {
				let converter = Arc::clone(&self);
				tokio::spawn(async move {
					let mut out = Vec::new();
					converter.convert_feature(&mut out, &feature, Some(index))?;
					Ok::<_, Error>(out)
				})
			})
			.buffered(num_cpus::get())
			.map(|joined| -> Result<Vec<ProtoFeature>> { joined.map_err(Error::from)? })
			.try_collect()
			.await?;

		Ok(converted.into_iter().flatten().collect())
	}
}
