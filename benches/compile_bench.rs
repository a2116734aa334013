// benches/compile_bench.rs

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rlibphonenumber_metadata::{BuildOptions, METADATA_BUILDER, MetadataBuilder, MetadataKind, XmlElement};

/// A territory close in size to the real descriptions of large countries.
const TERRITORY: &str = r#"
<territory id="GB" countryCode="44" internationalPrefix="00" nationalPrefix="0"
           preferredExtnPrefix=" ext. " nationalPrefixFormattingRule="$NP$FG"
           mobileNumberPortableRegion="true">
  <availableFormats>
    <numberFormat pattern="(\d{3})(\d{4})">
      <leadingDigits>800</leadingDigits>
      <leadingDigits>8001</leadingDigits>
      <format>$1 $2</format>
    </numberFormat>
    <numberFormat pattern="(\d{2})(\d{4})(\d{4})">
      <leadingDigits>
        [257]|
        3[0-4]
      </leadingDigits>
      <format>$1 $2 $3</format>
    </numberFormat>
    <numberFormat pattern="(\d{4})(\d{6})" nationalPrefixOptionalWhenFormatting="true">
      <leadingDigits>7(?:[1-57-9]|62)</leadingDigits>
      <format>$1 $2</format>
      <intlFormat>$1 $2</intlFormat>
    </numberFormat>
  </availableFormats>
  <generalDesc>
    <nationalNumberPattern>
      [1-357-9]\d{9}|
      [18]\d{8}|
      8\d{6}
    </nationalNumberPattern>
  </generalDesc>
  <fixedLine>
    <possibleLengths national="9,10" localOnly="[4-8]"/>
    <exampleNumber>1212345678</exampleNumber>
    <nationalNumberPattern>
      (?:
        1(?:
          1(?:[1-8]\d|9[0-4])|
          [2-8]\d{2}
        )|
        2(?:0[01378]|3[0189]|4[017]|8[0-46-9]|9[0-2])\d
      )\d{6}
    </nationalNumberPattern>
  </fixedLine>
  <mobile>
    <possibleLengths national="10"/>
    <exampleNumber>7400123456</exampleNumber>
    <nationalNumberPattern>7(?:[1-3]\d|4[0-8]|5[0-5]|7[0-7]|8[1-9]|9[0-8])\d{7}</nationalNumberPattern>
  </mobile>
  <pager>
    <possibleLengths national="10"/>
    <exampleNumber>7640123456</exampleNumber>
    <nationalNumberPattern>76(?:464|652)\d{5}</nationalNumberPattern>
  </pager>
  <tollFree>
    <possibleLengths national="7,9,10"/>
    <exampleNumber>8001234567</exampleNumber>
    <nationalNumberPattern>80[08]\d{7}|800\d{6}|8001111</nationalNumberPattern>
  </tollFree>
  <premiumRate>
    <possibleLengths national="10"/>
    <exampleNumber>9012345678</exampleNumber>
    <nationalNumberPattern>(?:8(?:4[2-5]|7[0-3])|9(?:[01]\d|8[2-49]))\d{7}</nationalNumberPattern>
  </premiumRate>
  <voip>
    <possibleLengths national="10"/>
    <exampleNumber>5612345678</exampleNumber>
    <nationalNumberPattern>56\d{8}</nationalNumberPattern>
  </voip>
  <uan>
    <possibleLengths national="10"/>
    <exampleNumber>5512345678</exampleNumber>
    <nationalNumberPattern>(?:3[0347]|55)\d{8}</nationalNumberPattern>
  </uan>
</territory>"#;

fn compile_benchmark(c: &mut Criterion) {
    let _ = env_logger::try_init();
    let territory = XmlElement::parse_str(TERRITORY).expect("Benchmark territory should be valid xml");
    let options = BuildOptions::default();

    let mut group = c.benchmark_group("Territory compilation");

    // Pattern cache already warm.
    group.bench_function("shared builder: compile()", |b| {
        b.iter(|| METADATA_BUILDER.compile(black_box("GB"), black_box(&territory), None, &options))
    });

    group.bench_function("fresh builder: compile()", |b| {
        b.iter(|| MetadataBuilder::new().compile(black_box("GB"), black_box(&territory), None, &options))
    });

    group.bench_function("lite build: compile()", |b| {
        let lite = BuildOptions::lite(MetadataKind::Regular);
        b.iter(|| METADATA_BUILDER.compile(black_box("GB"), black_box(&territory), None, &lite))
    });

    group.bench_function("xml + compile", |b| {
        b.iter(|| {
            let territory = XmlElement::parse_str(black_box(TERRITORY)).expect("valid xml");
            METADATA_BUILDER.compile("GB", &territory, None, &options)
        })
    });

    group.finish();
}

criterion_group!(benches, compile_benchmark);
criterion_main!(benches);
